use crate::pom_scanning::domain::RepositoryPoms;
use std::cmp::Ordering;

/// Display state of one repository in an inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No result has arrived yet
    Loading,
    /// The scan finished with an error
    Failed,
    /// The scan finished and the repository has no root pom.xml
    NoPom,
    /// The scan finished and found pom files with this many dependencies
    Found { dependency_count: usize },
}

impl ScanState {
    /// Classifies a possibly missing result
    pub fn of(result: Option<&RepositoryPoms>) -> Self {
        match result {
            None => ScanState::Loading,
            Some(result) => match result.poms() {
                None => ScanState::Failed,
                Some([]) => ScanState::NoPom,
                Some(_) => ScanState::Found {
                    dependency_count: result.dependency_count(),
                },
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScanState::Loading => "loading",
            ScanState::Failed => "error",
            ScanState::NoPom => "no pom.xml",
            ScanState::Found { .. } => "ok",
        }
    }
}

/// ResultRanking policy for ordering inventory entries
///
/// Higher ranks display first:
/// 1. Repositories with pom files, by descending dependency count
/// 2. Repositories without a pom.xml
/// 3. Repositories whose scan failed
/// 4. Repositories still loading
///
/// A pom.xml declaring zero dependencies still outranks a missing pom.xml.
pub struct ResultRanking;

impl ResultRanking {
    const LOADING: i64 = -3;
    const FAILED: i64 = -2;
    const NO_POM: i64 = -1;

    pub fn rank(state: ScanState) -> i64 {
        match state {
            ScanState::Loading => Self::LOADING,
            ScanState::Failed => Self::FAILED,
            ScanState::NoPom => Self::NO_POM,
            ScanState::Found { dependency_count } => {
                i64::try_from(dependency_count).unwrap_or(i64::MAX)
            }
        }
    }

    /// Display ordering: rank descending, then `full_name` ascending
    pub fn compare(
        (left_state, left_name): (ScanState, &str),
        (right_state, right_name): (ScanState, &str),
    ) -> Ordering {
        Self::rank(right_state)
            .cmp(&Self::rank(left_state))
            .then_with(|| left_name.cmp(right_name))
    }
}
