/// Network adapters for the hosting API
mod github_client;

pub use github_client::{GitHubClient, DEFAULT_API_URL};
