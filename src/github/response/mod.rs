mod repo_response;

pub use repo_response::RepoResponse;
