pub mod dependency;
pub mod repository;
pub mod repository_contents;
pub mod repository_poms;
pub mod scan_metadata;

pub use dependency::{Dependency, PomFile};
pub use repository::{Repository, RepositoryOwner};
pub use repository_contents::{ContentEntry, FileContent, RepositoryContents};
pub use repository_poms::RepositoryPoms;
pub use scan_metadata::ScanMetadata;
