use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Inventory the root pom.xml dependencies of every repository in a GitHub organization
#[derive(Parser, Debug)]
#[command(name = "pom-scan")]
#[command(version)]
#[command(
    about = "Inventory the root pom.xml dependencies of every repository in a GitHub organization",
    long_about = None
)]
pub struct Args {
    /// GitHub organization login (e.g. "apache")
    #[arg(value_name = "ORG")]
    pub organization: String,

    /// Output format: table or json [default: table]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL of the GitHub REST API [default: https://api.github.com]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Maximum number of repositories scanned at the same time (unbounded if omitted)
    #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_concurrency: Option<usize>,

    /// Path to a config file (defaults to ./pom-scan.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when any repository failed to scan
    #[arg(long)]
    pub fail_on_error: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("pom-scan").chain(argv.iter().copied()))
    }

    #[test]
    fn test_organization_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["acme"]).unwrap();
        assert_eq!(args.organization, "acme");
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(args.api_url.is_none());
        assert!(args.max_concurrency.is_none());
        assert!(args.config.is_none());
        assert!(!args.fail_on_error);
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "acme",
            "-f",
            "json",
            "-o",
            "inventory.json",
            "--api-url",
            "http://localhost:8080",
            "--max-concurrency",
            "5",
            "-c",
            "custom.yml",
            "--fail-on-error",
        ])
        .unwrap();

        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.output, Some(PathBuf::from("inventory.json")));
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(args.max_concurrency, Some(5));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert!(args.fail_on_error);
    }

    #[test]
    fn test_format_aliases() {
        let args = parse(&["acme", "--format", "markdown"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Table));
    }

    #[test]
    fn test_invalid_format() {
        let error = parse(&["acme", "--format", "xml"]).unwrap_err();
        assert!(error.to_string().contains("Invalid format: xml"));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        assert!(parse(&["acme", "--max-concurrency", "0"]).is_err());
    }
}
