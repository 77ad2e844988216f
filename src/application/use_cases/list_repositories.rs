use crate::ports::outbound::{HostingApi, RawRepository};
use crate::shared::error::ScanError;
use std::sync::Arc;

/// Repositories requested per listing page (the hosting API maximum)
pub const PAGE_SIZE: u32 = 100;

/// ListRepositoriesUseCase - Enumerates every repository of an organization
///
/// Pages are requested in order for as long as each one holds exactly
/// `PAGE_SIZE` repositories. The listing is all-or-nothing: a failure on any page discards
/// the pages already fetched.
pub struct ListRepositoriesUseCase<A> {
    api: Arc<A>,
}

impl<A> Clone for ListRepositoriesUseCase<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: HostingApi> ListRepositoriesUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Lists all repositories of `org`
    ///
    /// # Errors
    /// Returns `ScanError::ListError` carrying the failing page number when a
    /// request fails or answers with a status other than 200.
    pub async fn execute(&self, org: &str) -> Result<Vec<RawRepository>, ScanError> {
        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let response = self
                .api
                .list_org_repositories(org, page, PAGE_SIZE)
                .await
                .map_err(|e| ScanError::ListError {
                    org: org.to_string(),
                    page,
                    status: e.status,
                    message: e.message,
                })?;

            if response.status != 200 {
                return Err(ScanError::ListError {
                    org: org.to_string(),
                    page,
                    status: Some(response.status),
                    message: "unexpected response status".to_string(),
                });
            }

            let count = response.data.len();
            repositories.extend(response.data);

            if count != PAGE_SIZE as usize {
                return Ok(repositories);
            }
            page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom_scanning::domain::RepositoryContents;
    use crate::ports::outbound::{ApiError, ApiResponse, RawOwner};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn raw_repository(org: &str, index: usize) -> RawRepository {
        RawRepository {
            id: index as u64,
            node_id: format!("R_{}", index),
            name: format!("repo-{}", index),
            full_name: format!("{}/repo-{}", org, index),
            owner: RawOwner {
                login: org.to_string(),
                id: 1,
                node_id: String::new(),
                avatar_url: String::new(),
                url: String::new(),
                html_url: String::new(),
            },
            private: false,
            html_url: String::new(),
            description: None,
            fork: false,
            url: String::new(),
        }
    }

    /// Serves scripted pages and records which pages were requested
    struct PagedApi {
        pages: Vec<Result<ApiResponse<usize>, ApiError>>,
        requested: Mutex<Vec<(u32, u32)>>,
    }

    impl PagedApi {
        fn new(pages: Vec<Result<ApiResponse<usize>, ApiError>>) -> Self {
            Self {
                pages,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn with_sizes(sizes: &[usize]) -> Self {
            Self::new(sizes.iter().map(|&n| Ok(ApiResponse::ok(n))).collect())
        }

        fn requested(&self) -> Vec<(u32, u32)> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HostingApi for PagedApi {
        async fn list_org_repositories(
            &self,
            org: &str,
            page: u32,
            per_page: u32,
        ) -> Result<ApiResponse<Vec<RawRepository>>, ApiError> {
            self.requested.lock().unwrap().push((page, per_page));
            let offset = (page as usize - 1) * per_page as usize;
            match self.pages.get(page as usize - 1) {
                Some(Ok(response)) => Ok(ApiResponse {
                    status: response.status,
                    data: (0..response.data)
                        .map(|i| raw_repository(org, offset + i))
                        .collect(),
                }),
                Some(Err(error)) => Err(error.clone()),
                None => Ok(ApiResponse::ok(Vec::new())),
            }
        }

        async fn get_contents(
            &self,
            _owner: &str,
            _repo: &str,
            _path: &str,
        ) -> Result<ApiResponse<RepositoryContents>, ApiError> {
            unreachable!("listing never fetches contents")
        }
    }

    #[tokio::test]
    async fn test_three_pages_of_100_100_37() {
        let api = Arc::new(PagedApi::with_sizes(&[100, 100, 37]));
        let lister = ListRepositoriesUseCase::new(Arc::clone(&api));

        let repositories = lister.execute("acme").await.unwrap();

        assert_eq!(repositories.len(), 237);
        assert_eq!(api.requested(), vec![(1, 100), (2, 100), (3, 100)]);
        assert_eq!(repositories[236].full_name, "acme/repo-236");
    }

    #[tokio::test]
    async fn test_full_last_page_requests_one_empty_page() {
        let api = Arc::new(PagedApi::with_sizes(&[100, 0]));
        let lister = ListRepositoriesUseCase::new(Arc::clone(&api));

        let repositories = lister.execute("acme").await.unwrap();

        assert_eq!(repositories.len(), 100);
        assert_eq!(api.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_oversized_page_ends_the_listing() {
        let api = Arc::new(PagedApi::with_sizes(&[150, 150, 150]));
        let lister = ListRepositoriesUseCase::new(Arc::clone(&api));

        let repositories = lister.execute("acme").await.unwrap();

        assert_eq!(repositories.len(), 150);
        assert_eq!(api.requested(), vec![(1, 100)]);
    }

    #[tokio::test]
    async fn test_empty_organization() {
        let api = Arc::new(PagedApi::with_sizes(&[0]));
        let lister = ListRepositoriesUseCase::new(Arc::clone(&api));

        assert!(lister.execute("acme").await.unwrap().is_empty());
        assert_eq!(api.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_on_later_page_discards_everything() {
        let api = Arc::new(PagedApi::new(vec![
            Ok(ApiResponse::ok(100)),
            Err(ApiError::new(Some(502), "Bad Gateway")),
        ]));
        let lister = ListRepositoriesUseCase::new(api);

        let error = lister.execute("acme").await.unwrap_err();

        match error {
            ScanError::ListError {
                org, page, status, ..
            } => {
                assert_eq!(org, "acme");
                assert_eq!(page, 2);
                assert_eq!(status, Some(502));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_an_error() {
        let api = Arc::new(PagedApi::new(vec![Ok(ApiResponse {
            status: 203,
            data: 5,
        })]));
        let lister = ListRepositoriesUseCase::new(api);

        let error = lister.execute("acme").await.unwrap_err();
        assert!(error.to_string().contains("status '203' on page 1"));
    }

    #[tokio::test]
    async fn test_transport_failure_has_no_status() {
        let api = Arc::new(PagedApi::new(vec![Err(ApiError::new(
            None,
            "connection reset",
        ))]));
        let lister = ListRepositoriesUseCase::new(api);

        let error = lister.execute("acme").await.unwrap_err();
        assert!(matches!(error, ScanError::ListError { status: None, .. }));
        assert!(error.to_string().contains("connection reset"));
    }
}
