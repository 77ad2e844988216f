use crate::pom_scanning::domain::{ContentEntry, FileContent, RepositoryContents};
use crate::ports::outbound::{ApiError, ApiResponse, HostingApi, RawRepository};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const GITHUB_JSON: &str = "application/vnd.github+json";

/// One entry of a directory listing
#[derive(Debug, Deserialize)]
struct RawContentEntry {
    name: String,
    path: String,
}

/// A single file answered by the contents endpoint
#[derive(Debug, Deserialize)]
struct RawFile {
    path: String,
    /// Absent for symlinks and submodules
    #[serde(default)]
    content: String,
}

/// The contents endpoint answers an array for directories, an object for files
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContents {
    Directory(Vec<RawContentEntry>),
    File(RawFile),
}

impl From<RawContents> for RepositoryContents {
    fn from(raw: RawContents) -> Self {
        match raw {
            RawContents::Directory(entries) => RepositoryContents::Directory(
                entries
                    .into_iter()
                    .map(|entry| ContentEntry::new(entry.name, entry.path))
                    .collect(),
            ),
            RawContents::File(file) => {
                RepositoryContents::File(FileContent::new(file.path, file.content))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawErrorBody {
    message: String,
}

/// GitHubClient adapter implementing the HostingApi port over the REST API
///
/// Requests are unauthenticated. Every failure, including transport errors
/// and undecodable bodies, is returned as an [`ApiError`]; nothing is retried.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    /// Creates a client for the public GitHub API
    pub fn new() -> crate::shared::Result<Self> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a client for a GitHub-compatible API rooted at `base_url`
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> crate::shared::Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    fn parse_base_url(base_url: &str) -> crate::shared::Result<Url> {
        let trimmed = base_url.trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| anyhow::anyhow!("Invalid API URL '{}': {}", base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Invalid API URL '{}': scheme must be http or https",
                base_url
            );
        }
        if url.query().is_some() || url.fragment().is_some() {
            anyhow::bail!(
                "Invalid API URL '{}': query strings and fragments are not allowed",
                base_url
            );
        }
        Ok(url)
    }

    /// Rejects components that could change the shape of a request URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<(), ApiError> {
        let reason = if component.is_empty() {
            Some("is empty")
        } else if component.contains('/') || component.contains('\\') {
            Some("contains path separators which are not allowed")
        } else if component.contains("..") {
            Some("contains '..' which is not allowed")
        } else if component.contains(['#', '?', '@']) {
            Some("contains URL-unsafe characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ApiError::new(
                None,
                format!("Security: {} {}", component_type, reason),
            )),
            None => Ok(()),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| ApiError::new(None, format!("invalid request URL: {}", e)))
    }

    fn repositories_url(&self, org: &str, page: u32, per_page: u32) -> Result<Url, ApiError> {
        Self::validate_url_component(org, "Organization")?;
        let mut url = self.endpoint(&format!("/orgs/{}/repos", urlencoding::encode(org)))?;
        url.query_pairs_mut()
            .append_pair("type", "all")
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> Result<Url, ApiError> {
        Self::validate_url_component(owner, "Owner")?;
        Self::validate_url_component(repo, "Repository")?;

        let mut segments = Vec::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(ApiError::new(
                    None,
                    format!("Security: path '{}' contains relative segments", path),
                ));
            }
            segments.push(urlencoding::encode(segment).into_owned());
        }

        self.endpoint(&format!(
            "/repos/{}/{}/contents/{}",
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            segments.join("/")
        ))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<T>, ApiError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| ApiError::new(None, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::new(Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::new(
                Some(status.as_u16()),
                Self::error_message(status, &body),
            ));
        }

        let data = serde_json::from_str(&body).map_err(|e| {
            ApiError::new(Some(status.as_u16()), format!("invalid response body: {}", e))
        })?;
        Ok(ApiResponse {
            status: status.as_u16(),
            data,
        })
    }

    /// The API's own `message`, else the status reason phrase
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<RawErrorBody>(body)
            .map(|error| error.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            })
    }
}

#[async_trait]
impl HostingApi for GitHubClient {
    async fn list_org_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResponse<Vec<RawRepository>>, ApiError> {
        let url = self.repositories_url(org, page, per_page)?;
        self.get_json(url).await
    }

    async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ApiResponse<RepositoryContents>, ApiError> {
        let url = self.contents_url(owner, repo, path)?;
        let response: ApiResponse<RawContents> = self.get_json(url).await?;
        Ok(ApiResponse {
            status: response.status,
            data: response.data.into(),
        })
    }
}
