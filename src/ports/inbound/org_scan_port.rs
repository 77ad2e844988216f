use crate::application::dto::{OrgScanner, ScanRequest};
use async_trait::async_trait;

/// OrgScanPort - Inbound port for inventorying an organization
///
/// This is the application's public entry point. Presenters call it once per
/// scan and then consume the returned stream.
#[async_trait]
pub trait OrgScanPort {
    /// Lists the organization and starts scanning every repository
    ///
    /// Returns as soon as the listing is known. Per-repository results arrive
    /// afterwards on `OrgScanner::stream`. A failed listing is reported through
    /// `OrgScanner::error` instead of an `Err`, so presenters have a single
    /// shape to render.
    async fn scan_org(&self, request: ScanRequest) -> OrgScanner;
}
