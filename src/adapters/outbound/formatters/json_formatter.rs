use crate::application::read_models::{ScanResultEntry, ScanResultsView};
use crate::pom_scanning::domain::{PomFile, Repository, ScanMetadata};
use crate::pom_scanning::policies::ResultRanking;
use crate::ports::outbound::ScanFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    metadata: Metadata<'a>,
    summary: Summary,
    repositories: Vec<RepositoryReport<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    organization: &'a str,
    timestamp: &'a str,
    scan_id: &'a str,
    tools: Vec<Tool<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    repositories: usize,
    completed: usize,
    with_pom: usize,
    dependencies: usize,
    errors: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryReport<'a> {
    repository: &'a Repository,
    status: &'static str,
    rank: i64,
    /// `null` while loading or after an error
    poms: Option<&'a [PomFile]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a ScanResultEntry> for RepositoryReport<'a> {
    fn from(entry: &'a ScanResultEntry) -> Self {
        let state = entry.state();
        Self {
            repository: entry.repository(),
            status: state.label(),
            rank: ResultRanking::rank(state),
            poms: entry.result().and_then(|result| result.poms()),
            error: entry.result().and_then(|result| result.error()),
        }
    }
}

/// JsonFormatter adapter rendering the inventory as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanFormatter for JsonFormatter {
    fn format(&self, view: &ScanResultsView, metadata: &ScanMetadata) -> Result<String> {
        let report = Report {
            metadata: Metadata {
                organization: metadata.organization(),
                timestamp: metadata.timestamp(),
                scan_id: metadata.scan_id(),
                tools: vec![Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                }],
            },
            summary: Summary {
                repositories: view.total(),
                completed: view.completed(),
                with_pom: view.pom_count(),
                dependencies: view.dependency_count(),
                errors: view.error_count(),
            },
            repositories: view.sorted().into_iter().map(RepositoryReport::from).collect(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom_scanning::domain::repository::fixtures::repository;
    use crate::pom_scanning::domain::{Dependency, RepositoryPoms};
    use serde_json::Value;

    fn metadata() -> ScanMetadata {
        ScanMetadata::new(
            "acme".to_string(),
            "2024-01-01T00:00:00+00:00".to_string(),
            "pom-scan".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:00000000-0000-0000-0000-000000000000".to_string(),
        )
    }

    fn render(view: &ScanResultsView) -> Value {
        let output = JsonFormatter::new().format(view, &metadata()).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_metadata() {
        let json = render(&ScanResultsView::default());
        assert_eq!(json["metadata"]["organization"], "acme");
        assert_eq!(
            json["metadata"]["scanId"],
            "urn:uuid:00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(json["metadata"]["tools"][0]["name"], "pom-scan");
        assert_eq!(json["summary"]["repositories"], 0);
        assert_eq!(json["repositories"], Value::Array(vec![]));
    }

    #[test]
    fn test_repositories_in_ranked_order() {
        let mut view = ScanResultsView::new(&[
            repository("acme/a"),
            repository("acme/b"),
            repository("acme/c"),
        ]);
        view.apply(RepositoryPoms::failed(repository("acme/a"), "Not Found"));
        view.apply(RepositoryPoms::found(
            repository("acme/b"),
            vec![PomFile::new("pom.xml", vec![Dependency::new("guava", "33.0.0-jre")])],
        ));

        let json = render(&view);
        let repositories = json["repositories"].as_array().unwrap();

        assert_eq!(repositories[0]["repository"]["full_name"], "acme/b");
        assert_eq!(repositories[0]["status"], "ok");
        assert_eq!(repositories[0]["rank"], 1);
        assert_eq!(
            repositories[0]["poms"][0]["dependencies"][0]["artifactId"],
            "guava"
        );

        assert_eq!(repositories[1]["repository"]["full_name"], "acme/a");
        assert_eq!(repositories[1]["status"], "error");
        assert_eq!(repositories[1]["error"], "Not Found");
        assert_eq!(repositories[1]["poms"], Value::Null);

        assert_eq!(repositories[2]["status"], "loading");
        assert!(repositories[2].get("error").is_none());
    }

    #[test]
    fn test_summary_counts() {
        let mut view = ScanResultsView::new(&[repository("acme/a"), repository("acme/b")]);
        view.apply(RepositoryPoms::no_pom(repository("acme/a")));

        let json = render(&view);
        assert_eq!(json["summary"]["repositories"], 2);
        assert_eq!(json["summary"]["completed"], 1);
        assert_eq!(json["summary"]["withPom"], 0);
        assert_eq!(json["summary"]["errors"], 0);
    }
}
