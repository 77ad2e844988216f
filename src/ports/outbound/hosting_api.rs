use crate::pom_scanning::domain::{Repository, RepositoryContents, RepositoryOwner};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Repository owner as returned by the hosting API
#[derive(Debug, Clone, Deserialize)]
pub struct RawOwner {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub node_id: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
}

/// Repository record as returned by the organization listing
///
/// The real payload carries dozens more fields; they are ignored on
/// deserialization and never reach the domain.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    #[serde(default)]
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub owner: RawOwner,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub url: String,
}

impl From<RawOwner> for RepositoryOwner {
    fn from(raw: RawOwner) -> Self {
        Self {
            login: raw.login,
            id: raw.id,
            node_id: raw.node_id,
            avatar_url: raw.avatar_url,
            url: raw.url,
            html_url: raw.html_url,
        }
    }
}

impl From<RawRepository> for Repository {
    fn from(raw: RawRepository) -> Self {
        Self {
            id: raw.id,
            node_id: raw.node_id,
            name: raw.name,
            full_name: raw.full_name,
            owner: raw.owner.into(),
            private: raw.private,
            html_url: raw.html_url,
            description: raw.description,
            fork: raw.fork,
            url: raw.url,
        }
    }
}

/// Successful hosting API response with its HTTP status
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }
}

/// Failed hosting API call
///
/// `status` is `None` when no HTTP response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// HostingApi port for the source-forge operations the scanner needs
///
/// Implementations must be `Send + Sync`: one client is shared by all the
/// repository scans, which are polled concurrently on a spawned task.
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// Lists one page of an organization's repositories
    ///
    /// # Arguments
    /// * `org` - Organization login
    /// * `page` - 1-based page number
    /// * `per_page` - Requested page size
    async fn list_org_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResponse<Vec<RawRepository>>, ApiError>;

    /// Gets the contents at `path` in a repository
    ///
    /// An empty path addresses the repository root. Directories come back as
    /// listings; files come back with their base64 payload.
    async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ApiResponse<RepositoryContents>, ApiError>;
}
