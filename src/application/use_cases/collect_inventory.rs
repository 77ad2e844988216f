use crate::application::dto::{InventoryResponse, ScanRequest};
use crate::application::read_models::ScanResultsView;
use crate::pom_scanning::domain::ScanMetadata;
use crate::ports::inbound::OrgScanPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// CollectInventoryUseCase - Drains an organization scan into a finished inventory
///
/// This is the presenter side of a scan: it seeds one loading placeholder per
/// listed repository, folds each streamed result into the view and reports
/// progress as results arrive.
///
/// # Type Parameters
/// * `P` - OrgScanPort implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectInventoryUseCase<P, PR> {
    scan_port: P,
    progress_reporter: PR,
}

impl<P, PR> CollectInventoryUseCase<P, PR>
where
    P: OrgScanPort,
    PR: ProgressReporter,
{
    pub fn new(scan_port: P, progress_reporter: PR) -> Self {
        Self {
            scan_port,
            progress_reporter,
        }
    }

    /// Scans `request.organization` and waits for every repository
    ///
    /// # Errors
    /// Returns an error only when the repository listing fails. Failures of
    /// individual repositories are part of the returned inventory.
    pub async fn execute(&self, request: ScanRequest) -> Result<InventoryResponse> {
        let organization = request.organization.clone();
        let metadata = ScanMetadata::generate(&organization);

        self.progress_reporter.report(&format!(
            "📖 Listing repositories of organization: {}",
            organization
        ));

        let scanner = self.scan_port.scan_org(request).await;
        let (repositories, mut stream) = scanner.into_parts().map_err(anyhow::Error::msg)?;

        self.progress_reporter.report(&format!(
            "✅ Found {} repositor{}",
            repositories.len(),
            if repositories.len() == 1 { "y" } else { "ies" }
        ));
        self.progress_reporter.report("🔍 Scanning repositories for pom.xml...");

        let mut view = ScanResultsView::new(&repositories);
        while let Some(result) = stream.next_result().await {
            let full_name = result.repository().full_name.clone();
            if let Some(error) = result.error() {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", error));
            }
            if view.apply(result) {
                self.progress_reporter.report_progress(
                    view.completed(),
                    view.total(),
                    Some(&full_name),
                );
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Scanned {} repositories: {} with pom.xml, {} dependencies, {} error(s)",
            view.completed(),
            view.pom_count(),
            view.dependency_count(),
            view.error_count()
        ));

        Ok(InventoryResponse::new(view, metadata))
    }
}
