use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pom_scan::prelude::{
    ApiError, ApiResponse, ContentEntry, FileContent, HostingApi, RawOwner, RawRepository,
    RepositoryContents,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory GitHub organization
///
/// Listing pages are cut from `repositories`; contents are answered from a
/// map keyed by `(repository name, path)`. Anything not registered answers
/// 404 "Not Found", like the real API.
#[derive(Default)]
pub struct MockHostingApi {
    repositories: Vec<RawRepository>,
    contents: HashMap<(String, String), Result<RepositoryContents, ApiError>>,
    listing_error: Option<ApiError>,
    pages_requested: Mutex<Vec<u32>>,
}

#[allow(dead_code)]
impl MockHostingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` repositories named `<prefix>-<i>` to the organization
    pub fn with_repositories(mut self, org: &str, prefix: &str, count: usize) -> Self {
        for i in 0..count {
            let name = format!("{}-{}", prefix, i);
            self.repositories.push(raw_repository(org, &name));
        }
        self
    }

    pub fn with_repository(mut self, org: &str, name: &str) -> Self {
        self.repositories.push(raw_repository(org, name));
        self
    }

    /// Root directory listing of `repo`
    pub fn with_root(mut self, repo: &str, names: &[&str]) -> Self {
        let entries = names
            .iter()
            .map(|name| ContentEntry::new(*name, *name))
            .collect();
        self.contents.insert(
            (repo.to_string(), String::new()),
            Ok(RepositoryContents::Directory(entries)),
        );
        self
    }

    /// Root listing containing `pom.xml`, and the pom itself base64 encoded with line breaks
    pub fn with_pom(mut self, repo: &str, xml: &str) -> Self {
        self = self.with_root(repo, &["README.md", "pom.xml", "src"]);
        let encoded = STANDARD
            .encode(xml)
            .as_bytes()
            .chunks(60)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        self.contents.insert(
            (repo.to_string(), "pom.xml".to_string()),
            Ok(RepositoryContents::File(FileContent::new("pom.xml", encoded))),
        );
        self
    }

    pub fn with_contents_error(mut self, repo: &str, path: &str, error: ApiError) -> Self {
        self.contents
            .insert((repo.to_string(), path.to_string()), Err(error));
        self
    }

    pub fn with_listing_error(mut self, error: ApiError) -> Self {
        self.listing_error = Some(error);
        self
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.pages_requested.lock().unwrap().clone()
    }
}

fn raw_repository(org: &str, name: &str) -> RawRepository {
    RawRepository {
        id: 1,
        node_id: format!("R_{}", name),
        name: name.to_string(),
        full_name: format!("{}/{}", org, name),
        owner: RawOwner {
            login: org.to_string(),
            id: 2,
            node_id: format!("O_{}", org),
            avatar_url: String::new(),
            url: format!("https://api.github.com/users/{}", org),
            html_url: format!("https://github.com/{}", org),
        },
        private: false,
        html_url: format!("https://github.com/{}/{}", org, name),
        description: None,
        fork: false,
        url: format!("https://api.github.com/repos/{}/{}", org, name),
    }
}

#[async_trait]
impl HostingApi for MockHostingApi {
    async fn list_org_repositories(
        &self,
        _org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResponse<Vec<RawRepository>>, ApiError> {
        self.pages_requested.lock().unwrap().push(page);
        if let Some(error) = &self.listing_error {
            return Err(error.clone());
        }

        let start = ((page - 1) * per_page) as usize;
        let data = self
            .repositories
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok(ApiResponse::ok(data))
    }

    async fn get_contents(
        &self,
        _owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ApiResponse<RepositoryContents>, ApiError> {
        tokio::task::yield_now().await;
        match self.contents.get(&(repo.to_string(), path.to_string())) {
            Some(Ok(contents)) => Ok(ApiResponse::ok(contents.clone())),
            Some(Err(error)) => Err(error.clone()),
            None => Err(ApiError::new(Some(404), "Not Found")),
        }
    }
}
