//! pom-scan - pom.xml dependency inventory for GitHub organizations
//!
//! This library lists every repository of a GitHub organization, fetches each
//! repository's root `pom.xml` and extracts its declared dependencies. Results
//! stream back one repository at a time as scans complete.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`pom_scanning`): Repository and dependency models, the
//!   pom.xml parser and the result ranking policy
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): GitHub client, console progress, formatters
//!   and output sinks
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use pom_scan::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let api = Arc::new(GitHubClient::new()?);
//! let use_case = ScanOrgUseCase::new(api);
//!
//! let scanner = use_case.scan_org(ScanRequest::new("apache")?).await;
//! let (repositories, mut stream) = scanner.into_parts().map_err(anyhow::Error::msg)?;
//! println!("scanning {} repositories", repositories.len());
//!
//! while let Some(result) = stream.next_result().await {
//!     println!("{}: {} dependencies", result.repository().full_name, result.dependency_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod pom_scanning;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::network::GitHubClient;
    pub use crate::application::dto::{
        InventoryResponse, OrgScanner, OutputFormat, ScanEvent, ScanRequest, ScanStream,
    };
    pub use crate::application::read_models::{ScanResultEntry, ScanResultsView};
    pub use crate::application::use_cases::{
        CollectInventoryUseCase, ListRepositoriesUseCase, ScanOrgUseCase, ScanRepositoryUseCase,
    };
    pub use crate::pom_scanning::domain::{
        ContentEntry, Dependency, FileContent, PomFile, Repository, RepositoryContents,
        RepositoryOwner, RepositoryPoms, ScanMetadata,
    };
    pub use crate::pom_scanning::policies::{ResultRanking, ScanState};
    pub use crate::pom_scanning::services::PomParser;
    pub use crate::ports::inbound::OrgScanPort;
    pub use crate::ports::outbound::{
        ApiError, ApiResponse, HostingApi, OutputPresenter, ProgressReporter, RawOwner,
        RawRepository, ScanFormatter,
    };
    pub use crate::shared::error::{ExitCode, ScanError};
    pub use crate::shared::Result;
}
