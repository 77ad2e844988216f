use crate::application::read_models::{ScanResultEntry, ScanResultsView};
use crate::pom_scanning::domain::ScanMetadata;
use crate::pom_scanning::policies::ScanState;
use crate::ports::outbound::ScanFormatter;
use crate::shared::Result;

const SUMMARY_HEADER: &str = "| Repositories | With pom.xml | Dependencies | Errors |\n";
const SUMMARY_SEPARATOR: &str = "|--------------|--------------|--------------|--------|\n";

const TABLE_HEADER: &str = "| Repository | Status | pom.xml | artifactId | version |\n";
const TABLE_SEPARATOR: &str = "|------------|--------|---------|------------|---------|\n";

/// TableFormatter adapter rendering the inventory as Markdown tables
///
/// Repositories appear in ranked order. A repository with dependencies gets
/// one row per dependency; every other repository gets a single row.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn repository_cell(entry: &ScanResultEntry) -> String {
        let repository = entry.repository();
        let name = Self::escape_cell(&repository.full_name);
        if repository.html_url.is_empty() {
            name
        } else {
            format!("[{}]({})", name, repository.html_url)
        }
    }

    fn render_header(&self, output: &mut String, metadata: &ScanMetadata) {
        output.push_str(&format!(
            "# pom.xml Inventory: {}\n\n",
            Self::escape_cell(metadata.organization())
        ));
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
    }

    fn render_summary(&self, output: &mut String, view: &ScanResultsView) {
        output.push_str("## Summary\n\n");
        output.push_str(SUMMARY_HEADER);
        output.push_str(SUMMARY_SEPARATOR);
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n\n",
            view.total(),
            view.pom_count(),
            view.dependency_count(),
            view.error_count()
        ));
    }

    fn render_repositories(&self, output: &mut String, view: &ScanResultsView) {
        output.push_str("## Repositories\n\n");
        if view.total() == 0 {
            output.push_str("*No repositories found*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for entry in view.sorted() {
            let repository = Self::repository_cell(entry);
            let state = entry.state();
            let poms = entry.result().and_then(|result| result.poms()).unwrap_or(&[]);

            let mut wrote_row = false;
            for pom in poms {
                for dependency in &pom.dependencies {
                    output.push_str(&format!(
                        "| {} | {} | {} | {} | {} |\n",
                        repository,
                        state.label(),
                        Self::escape_cell(&pom.path),
                        Self::escape_cell(&dependency.artifact_id),
                        Self::escape_cell(&dependency.version)
                    ));
                    wrote_row = true;
                }
            }

            if !wrote_row {
                let pom_path = poms.first().map(|pom| pom.path.as_str()).unwrap_or("");
                output.push_str(&format!(
                    "| {} | {} | {} |  |  |\n",
                    repository,
                    state.label(),
                    Self::escape_cell(pom_path)
                ));
            }
        }
        output.push('\n');
    }

    fn render_errors(&self, output: &mut String, view: &ScanResultsView) {
        let failures: Vec<(&str, &str)> = view
            .sorted()
            .into_iter()
            .filter(|entry| entry.state() == ScanState::Failed)
            .filter_map(|entry| {
                let error = entry.result()?.error()?;
                Some((entry.repository().full_name.as_str(), error))
            })
            .collect();
        if failures.is_empty() {
            return;
        }

        output.push_str("## Errors\n\n");
        for (full_name, error) in failures {
            output.push_str(&format!(
                "- **{}**: {}\n",
                Self::escape_cell(full_name),
                error.replace('\n', " ")
            ));
        }
        output.push('\n');
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanFormatter for TableFormatter {
    fn format(&self, view: &ScanResultsView, metadata: &ScanMetadata) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, metadata);
        self.render_summary(&mut output, view);
        self.render_repositories(&mut output, view);
        self.render_errors(&mut output, view);
        Ok(output)
    }
}
