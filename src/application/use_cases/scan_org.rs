use crate::application::dto::{OrgScanner, ScanEvent, ScanRequest, ScanStream};
use crate::application::use_cases::{ListRepositoriesUseCase, ScanRepositoryUseCase};
use crate::pom_scanning::domain::Repository;
use crate::ports::inbound::OrgScanPort;
use crate::ports::outbound::HostingApi;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast;

/// ScanOrgUseCase - Lists an organization and scans all of its repositories
///
/// All repository scans are driven from a single background task and
/// interleave at their network calls. Without a concurrency cap every scan
/// starts at once. Dispatched scans always run to completion; dropping the
/// stream does not cancel them.
pub struct ScanOrgUseCase<A> {
    lister: ListRepositoriesUseCase<A>,
    scanner: ScanRepositoryUseCase<A>,
}

impl<A> ScanOrgUseCase<A>
where
    A: HostingApi + 'static,
{
    /// Creates the use case around a shared hosting API client
    pub fn new(api: Arc<A>) -> Self {
        Self {
            lister: ListRepositoriesUseCase::new(Arc::clone(&api)),
            scanner: ScanRepositoryUseCase::new(api),
        }
    }

    /// Starts scanning `repositories` in the background
    ///
    /// The returned stream is subscribed before the first scan is polled, so
    /// it observes every result. The channel holds all N results plus the
    /// completion, which keeps even a slow subscriber from lagging.
    fn dispatch(&self, repositories: Vec<Repository>, max_concurrency: Option<usize>) -> ScanStream {
        let (sender, receiver) = broadcast::channel(repositories.len() + 1);
        let stream = ScanStream::new(receiver);
        let scanner = self.scanner.clone();

        tokio::spawn(async move {
            stream::iter(repositories)
                .for_each_concurrent(max_concurrency, |repository| {
                    let scanner = &scanner;
                    let sender = &sender;
                    async move {
                        let result = scanner.execute(repository).await;
                        // No subscriber left is fine; the scan still completes.
                        let _ = sender.send(ScanEvent::Scanned(result));
                    }
                })
                .await;

            // for_each_concurrent resolves only after every scan has emitted.
            let _ = sender.send(ScanEvent::Completed);
        });

        stream
    }
}

#[async_trait]
impl<A> OrgScanPort for ScanOrgUseCase<A>
where
    A: HostingApi + 'static,
{
    async fn scan_org(&self, request: ScanRequest) -> OrgScanner {
        let raw_repositories = match self.lister.execute(&request.organization).await {
            Ok(raw_repositories) => raw_repositories,
            Err(error) => return OrgScanner::failed(error.to_string()),
        };

        let repositories: Vec<Repository> = raw_repositories
            .into_iter()
            .map(Repository::from)
            .collect();

        let stream = self.dispatch(repositories.clone(), request.max_concurrency);
        OrgScanner::started(repositories, stream)
    }
}
