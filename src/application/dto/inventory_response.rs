use crate::application::read_models::ScanResultsView;
use crate::pom_scanning::domain::ScanMetadata;

/// InventoryResponse - Finished inventory ready for formatting
#[derive(Debug)]
pub struct InventoryResponse {
    /// Every repository with its final scan result
    pub view: ScanResultsView,
    /// Organization, timestamp and tool information
    pub metadata: ScanMetadata,
}

impl InventoryResponse {
    pub fn new(view: ScanResultsView, metadata: ScanMetadata) -> Self {
        Self { view, metadata }
    }
}
