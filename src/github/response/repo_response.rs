use serde::Deserialize;

/// The subset of `GET /repos/{owner}/{repo}` the mirror needs.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoResponse {
    pub full_name: String,
    pub html_url: String,
    pub name: String,
    pub default_branch: String,
    pub description: Option<String>,
    pub clone_url: String,
    pub private: bool,
    #[serde(default)]
    pub topics: Vec<String>,
}
