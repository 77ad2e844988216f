/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (hosting API, console, file system).
pub mod formatter;
pub mod hosting_api;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::ScanFormatter;
pub use hosting_api::{ApiError, ApiResponse, HostingApi, RawOwner, RawRepository};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
