use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean inventory,
/// an inventory with per-repository failures, and a run that never started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every repository was scanned (or errors are tolerated)
    Success = 0,
    /// At least one repository failed to scan and `--fail-on-error` was set
    RepositoryErrors = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (organization listing failed, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RepositoryErrors => write!(f, "Repository Errors (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors produced while scanning an organization.
///
/// `ListError` is fatal to a whole scan. The repository-level variants are
/// captured into the affected repository's result and never abort siblings.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error getting repositories for '{org}': GitHub returned {}", describe_list_failure(.page, .status, .message))]
    ListError {
        org: String,
        page: u32,
        status: Option<u16>,
        message: String,
    },

    #[error("failed to get contents of '{repository}' at '{path}': {message}")]
    RepositoryFetchError {
        repository: String,
        path: String,
        status: Option<u16>,
        message: String,
    },

    #[error("failed to decode '{path}' in '{repository}': {details}")]
    DecodeError {
        repository: String,
        path: String,
        details: String,
    },

    #[error("Invalid organization name: '{org}'\nReason: {reason}\n\n💡 Hint: Pass the organization login as it appears in its GitHub URL")]
    InvalidOrganization { org: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    ConfigError { message: String, hint: String },
}

fn describe_list_failure(page: &u32, status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!(
            "status '{}' on page {} of repository list: {}",
            status, page, message
        ),
        None => format!("{} on page {} of repository list", message, page),
    }
}
