use super::{PomFile, Repository};

/// Result of scanning one repository
///
/// Holds either the discovered pom files or the error that stopped the scan,
/// never both. An empty pom list means the repository has no root pom.xml,
/// which is a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPoms {
    repository: Repository,
    outcome: Result<Vec<PomFile>, String>,
}

impl RepositoryPoms {
    pub fn found(repository: Repository, poms: Vec<PomFile>) -> Self {
        Self {
            repository,
            outcome: Ok(poms),
        }
    }

    pub fn no_pom(repository: Repository) -> Self {
        Self::found(repository, Vec::new())
    }

    pub fn failed(repository: Repository, error: impl Into<String>) -> Self {
        Self {
            repository,
            outcome: Err(error.into()),
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Discovered pom files, `None` when the scan failed
    pub fn poms(&self) -> Option<&[PomFile]> {
        self.outcome.as_deref().ok()
    }

    /// Failure message, `None` when the scan succeeded
    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }

    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }

    /// Total number of dependencies across all pom files
    pub fn dependency_count(&self) -> usize {
        self.poms()
            .map(|poms| poms.iter().map(|pom| pom.dependencies.len()).sum())
            .unwrap_or(0)
    }
}
