/// Use cases module containing application business logic orchestration
mod collect_inventory;
mod list_repositories;
mod scan_org;
mod scan_repository;

pub use collect_inventory::CollectInventoryUseCase;
pub use list_repositories::{ListRepositoriesUseCase, PAGE_SIZE};
pub use scan_org::ScanOrgUseCase;
pub use scan_repository::ScanRepositoryUseCase;
