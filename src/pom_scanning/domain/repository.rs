use serde::Serialize;

/// Owner of a repository, reduced to the fields the scanner consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryOwner {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub url: String,
    pub html_url: String,
}

/// Repository identity record
///
/// Built once per scan from the hosting API payload and shared by value
/// afterwards. `full_name` is the identity used to match scan results to
/// their placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub owner: RepositoryOwner,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
}

impl Repository {
    /// Login of the owning organization or user
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }
}
