/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters, keeping
/// the domain layer isolated.
mod inventory_response;
mod org_scanner;
mod output_format;
mod scan_request;

pub use inventory_response::InventoryResponse;
pub use org_scanner::{OrgScanner, ScanEvent, ScanStream};
pub use output_format::OutputFormat;
pub use scan_request::ScanRequest;
