use chrono::Utc;
use uuid::Uuid;

/// Metadata attached to a rendered inventory report
#[derive(Debug, Clone)]
pub struct ScanMetadata {
    organization: String,
    timestamp: String,
    tool_name: String,
    tool_version: String,
    scan_id: String,
}

impl ScanMetadata {
    pub fn new(
        organization: String,
        timestamp: String,
        tool_name: String,
        tool_version: String,
        scan_id: String,
    ) -> Self {
        Self {
            organization,
            timestamp,
            tool_name,
            tool_version,
            scan_id,
        }
    }

    /// Metadata for a scan starting now, stamped with this tool's version
    pub fn generate(organization: &str) -> Self {
        Self::new(
            organization.to_string(),
            Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn scan_id(&self) -> &str {
        &self.scan_id
    }
}
