use crate::github::response::RepoResponse;

/// Snapshot of the GitHub repository being mirrored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRepoMetadata {
    pub full_name: String,
    pub html_url: String,
    pub name: String,
    pub default_branch: String,
    pub description: Option<String>,
    pub clone_url: String,
    pub is_private: bool,
    pub topics: Vec<String>,
}

impl From<RepoResponse> for SourceRepoMetadata {
    fn from(repo: RepoResponse) -> Self {
        SourceRepoMetadata {
            full_name: repo.full_name,
            html_url: repo.html_url,
            name: repo.name,
            default_branch: repo.default_branch,
            description: repo.description,
            clone_url: repo.clone_url,
            is_private: repo.private,
            topics: repo.topics,
        }
    }
}
