use crate::shared::error::ScanError;
use crate::shared::Result;

/// Maximum length of an organization login on GitHub
const MAX_ORGANIZATION_LENGTH: usize = 39;

/// ScanRequest - Internal request DTO for the organization scan use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Organization whose repositories are inventoried
    pub organization: String,
    /// Cap on simultaneously running repository scans; `None` scans all at once
    pub max_concurrency: Option<usize>,
}

impl ScanRequest {
    /// Creates a request with unbounded fan-out
    ///
    /// # Errors
    /// Returns `ScanError::InvalidOrganization` when the name is empty, too long,
    /// or contains characters that would alter the request URL.
    pub fn new(organization: impl Into<String>) -> Result<Self> {
        let organization = organization.into();
        Self::validate_organization(&organization)?;
        Ok(Self {
            organization,
            max_concurrency: None,
        })
    }

    /// Limits how many repositories are scanned at the same time
    ///
    /// # Errors
    /// Returns an error when `limit` is zero.
    pub fn with_max_concurrency(mut self, limit: usize) -> Result<Self> {
        if limit == 0 {
            anyhow::bail!("max concurrency must be at least 1");
        }
        self.max_concurrency = Some(limit);
        Ok(self)
    }

    fn validate_organization(organization: &str) -> Result<()> {
        let reject = |reason: &str| -> Result<()> {
            Err(ScanError::InvalidOrganization {
                org: organization.to_string(),
                reason: reason.to_string(),
            }
            .into())
        };

        if organization.trim().is_empty() {
            return reject("name is empty");
        }
        if organization.len() > MAX_ORGANIZATION_LENGTH {
            return reject("name is longer than 39 characters");
        }
        if organization.contains("..") {
            return reject("name contains '..'");
        }
        if !organization
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return reject("only ASCII letters, digits, '-', '_' and '.' are allowed");
        }
        Ok(())
    }
}
