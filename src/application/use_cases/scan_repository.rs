use crate::pom_scanning::domain::{
    Dependency, FileContent, PomFile, Repository, RepositoryContents, RepositoryPoms,
};
use crate::pom_scanning::services::{PomLocator, PomParser};
use crate::ports::outbound::{ApiError, HostingApi};
use crate::shared::error::ScanError;
use std::sync::Arc;

/// Path that addresses a repository's root directory
const ROOT_PATH: &str = "";

/// ScanRepositoryUseCase - Inventories the root pom.xml of one repository
///
/// Every failure is folded into the returned `RepositoryPoms`, so callers
/// never have to handle an error from a single repository.
pub struct ScanRepositoryUseCase<A> {
    api: Arc<A>,
}

impl<A> Clone for ScanRepositoryUseCase<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: HostingApi> ScanRepositoryUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Scans `repository`
    ///
    /// Steps run strictly in order: list the root, locate `pom.xml`, fetch
    /// it, decode and parse it. A missing pom.xml is a successful scan with
    /// no pom files.
    pub async fn execute(&self, repository: Repository) -> RepositoryPoms {
        match self.scan(&repository).await {
            Ok(poms) => RepositoryPoms::found(repository, poms),
            Err(error) => RepositoryPoms::failed(repository, error.to_string()),
        }
    }

    async fn scan(&self, repository: &Repository) -> Result<Vec<PomFile>, ScanError> {
        let entries = match self.fetch(repository, ROOT_PATH).await? {
            RepositoryContents::Directory(entries) => entries,
            RepositoryContents::File(_) => {
                return Err(ScanError::RepositoryFetchError {
                    repository: repository.full_name.clone(),
                    path: ROOT_PATH.to_string(),
                    status: None,
                    message: "expected a directory listing but received a file".to_string(),
                })
            }
        };

        let Some(pom_entry) = PomLocator::locate(&entries) else {
            return Ok(Vec::new());
        };

        let file = match self.fetch(repository, &pom_entry.path).await? {
            RepositoryContents::File(file) => file,
            RepositoryContents::Directory(_) => {
                return Err(ScanError::DecodeError {
                    repository: repository.full_name.clone(),
                    path: pom_entry.path.clone(),
                    details: "expected a file but received a directory listing".to_string(),
                })
            }
        };

        let dependencies = Self::parse(repository, &file)?;
        Ok(vec![PomFile::new(pom_entry.path.clone(), dependencies)])
    }

    async fn fetch(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<RepositoryContents, ScanError> {
        self.api
            .get_contents(repository.owner_login(), &repository.name, path)
            .await
            .map(|response| response.data)
            .map_err(|ApiError { status, message }| ScanError::RepositoryFetchError {
                repository: repository.full_name.clone(),
                path: path.to_string(),
                status,
                message,
            })
    }

    fn parse(
        repository: &Repository,
        file: &FileContent,
    ) -> Result<Vec<Dependency>, ScanError> {
        let xml = file.decode_text().map_err(|e| ScanError::DecodeError {
            repository: repository.full_name.clone(),
            path: file.path.clone(),
            details: e.to_string(),
        })?;
        Ok(PomParser::extract_dependencies(&xml))
    }
}
