/// Mock implementations for testing
mod mock_hosting_api;
mod mock_progress_reporter;

pub use mock_hosting_api::MockHostingApi;
pub use mock_progress_reporter::MockProgressReporter;
