use crate::pom_scanning::domain::{Repository, RepositoryPoms};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// One event on a scan stream
///
/// A stream carries zero or more `Scanned` events followed by exactly one
/// `Completed`. Nothing follows `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Scanned(RepositoryPoms),
    Completed,
}

/// Receiving side of an organization scan
///
/// Results arrive in scan-completion order, not listing order. Additional
/// consumers can attach with [`ScanStream::subscribe`]; they observe every
/// event sent after they attach.
#[derive(Debug)]
pub struct ScanStream {
    receiver: broadcast::Receiver<ScanEvent>,
    finished: bool,
}

impl ScanStream {
    pub(crate) fn new(receiver: broadcast::Receiver<ScanEvent>) -> Self {
        Self {
            receiver,
            finished: false,
        }
    }

    /// Attaches another consumer to the same scan
    pub fn subscribe(&self) -> Self {
        Self::new(self.receiver.resubscribe())
    }

    /// Waits for the next event
    ///
    /// Returns `None` once `Completed` has been delivered, or if the scan
    /// was torn down without completing (the runtime shut down).
    pub async fn recv(&mut self) -> Option<ScanEvent> {
        if self.finished {
            return None;
        }

        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if event == ScanEvent::Completed {
                        self.finished = true;
                    }
                    return Some(event);
                }
                // The channel is sized for every event of the scan.
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }

    /// Waits for the next repository result, `None` after completion
    pub async fn next_result(&mut self) -> Option<RepositoryPoms> {
        match self.recv().await? {
            ScanEvent::Scanned(result) => Some(result),
            ScanEvent::Completed => None,
        }
    }

    /// Drains the stream until completion
    pub async fn collect(mut self) -> Vec<RepositoryPoms> {
        let mut results = Vec::new();
        while let Some(result) = self.next_result().await {
            results.push(result);
        }
        results
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Handle returned by an organization scan
///
/// Either the listing succeeded, in which case the repositories are known and
/// the stream is live, or it failed and only the error is set.
#[derive(Debug)]
pub struct OrgScanner {
    repositories: Option<Vec<Repository>>,
    stream: Option<ScanStream>,
    error: Option<String>,
}

impl OrgScanner {
    pub fn started(repositories: Vec<Repository>, stream: ScanStream) -> Self {
        Self {
            repositories: Some(repositories),
            stream: Some(stream),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            repositories: None,
            stream: None,
            error: Some(error.into()),
        }
    }

    /// Repositories being scanned, `None` if the listing failed
    pub fn repositories(&self) -> Option<&[Repository]> {
        self.repositories.as_deref()
    }

    /// Listing failure, `None` if scanning started
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn stream_mut(&mut self) -> Option<&mut ScanStream> {
        self.stream.as_mut()
    }

    /// Splits the handle into its repositories and stream, or the error
    pub fn into_parts(self) -> Result<(Vec<Repository>, ScanStream), String> {
        match (self.repositories, self.stream, self.error) {
            (Some(repositories), Some(stream), None) => Ok((repositories, stream)),
            (_, _, error) => Err(error.unwrap_or_else(|| "scan did not start".to_string())),
        }
    }
}
