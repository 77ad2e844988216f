use crate::pom_scanning::domain::{Repository, RepositoryPoms};
use crate::pom_scanning::policies::{ResultRanking, ScanState};

/// One row of the inventory: a repository and its result once it arrives
#[derive(Debug, Clone)]
pub struct ScanResultEntry {
    repository: Repository,
    result: Option<RepositoryPoms>,
}

impl ScanResultEntry {
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Scan result, `None` while the repository is still loading
    pub fn result(&self) -> Option<&RepositoryPoms> {
        self.result.as_ref()
    }

    pub fn state(&self) -> ScanState {
        ScanState::of(self.result.as_ref())
    }

    pub fn is_loading(&self) -> bool {
        self.result.is_none()
    }
}

/// Presenter-side state of an organization scan
///
/// Seeded with one loading placeholder per listed repository; each incoming
/// result replaces the placeholder with the same `full_name`.
#[derive(Debug, Clone, Default)]
pub struct ScanResultsView {
    entries: Vec<ScanResultEntry>,
    completed: usize,
}

impl ScanResultsView {
    pub fn new(repositories: &[Repository]) -> Self {
        let entries = repositories
            .iter()
            .map(|repository| ScanResultEntry {
                repository: repository.clone(),
                result: None,
            })
            .collect();
        Self {
            entries,
            completed: 0,
        }
    }

    /// Records a result against its placeholder
    ///
    /// Returns `false` and changes nothing when no placeholder matches or the
    /// placeholder already holds a result.
    pub fn apply(&mut self, result: RepositoryPoms) -> bool {
        let full_name = &result.repository().full_name;
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| &entry.repository.full_name == full_name)
        else {
            return false;
        };

        if entry.result.is_some() {
            return false;
        }

        entry.result = Some(result);
        self.completed += 1;
        true
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.entries.len()
    }

    /// Entries in listing order
    pub fn entries(&self) -> &[ScanResultEntry] {
        &self.entries
    }

    /// Entries in display order (see `ResultRanking`)
    pub fn sorted(&self) -> Vec<&ScanResultEntry> {
        let mut sorted: Vec<&ScanResultEntry> = self.entries.iter().collect();
        sorted.sort_by(|left, right| {
            ResultRanking::compare(
                (left.state(), &left.repository.full_name),
                (right.state(), &right.repository.full_name),
            )
        });
        sorted
    }

    pub fn error_count(&self) -> usize {
        self.count_state(|state| state == ScanState::Failed)
    }

    /// Repositories where a pom.xml was found and parsed
    pub fn pom_count(&self) -> usize {
        self.count_state(|state| matches!(state, ScanState::Found { .. }))
    }

    pub fn dependency_count(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref())
            .map(RepositoryPoms::dependency_count)
            .sum()
    }

    fn count_state(&self, predicate: impl Fn(ScanState) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| predicate(entry.state()))
            .count()
    }
}
