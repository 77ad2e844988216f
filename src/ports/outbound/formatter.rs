use crate::application::read_models::ScanResultsView;
use crate::pom_scanning::domain::ScanMetadata;
use crate::shared::Result;

/// ScanFormatter port for rendering an organization inventory
pub trait ScanFormatter {
    /// Formats the current state of the inventory
    ///
    /// # Arguments
    /// * `view` - Scan results in display order
    /// * `metadata` - Organization, timestamp and tool information
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &ScanResultsView, metadata: &ScanMetadata) -> Result<String>;
}
