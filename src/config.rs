//! Configuration file support for pom-scan.
//!
//! Provides YAML-based configuration through `pom-scan.config.yml` files and
//! merges it with command-line arguments into the settings of one run.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::DEFAULT_API_URL;
use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::shared::error::ScanError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pom-scan.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub api_url: Option<String>,
    pub max_concurrency: Option<usize>,
    pub fail_on_error: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to unit, not to a mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|message| ScanError::ConfigError {
            message,
            hint: "Set 'format' to 'table' or 'json'.".to_string(),
        })?;
    }

    if config.max_concurrency == Some(0) {
        return Err(ScanError::ConfigError {
            message: "max_concurrency must be at least 1".to_string(),
            hint: "Remove 'max_concurrency' to scan every repository at once.".to_string(),
        }
        .into());
    }

    if config
        .api_url
        .as_deref()
        .is_some_and(|url| url.trim().is_empty())
    {
        return Err(ScanError::ConfigError {
            message: "api_url must not be empty".to_string(),
            hint: format!("Remove 'api_url' to use {}.", DEFAULT_API_URL),
        }
        .into());
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings of one run.
///
/// Command-line flags win over the config file, which wins over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub organization: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub api_url: String,
    pub max_concurrency: Option<usize>,
    pub fail_on_error: bool,
}

impl ScanSettings {
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::Table,
        };

        Ok(Self {
            organization: args.organization,
            format,
            output: args.output,
            api_url: args
                .api_url
                .or(config.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            max_concurrency: args.max_concurrency.or(config.max_concurrency),
            fail_on_error: args.fail_on_error || config.fail_on_error.unwrap_or(false),
        })
    }

    /// Loads the config named by `--config`, else the one in `dir` if present
    pub fn load(args: Args, dir: &Path) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Some(load_config_from_path(path)?),
            None => discover_config(dir)?,
        };
        Self::resolve(args, config)
    }
}
