pub mod github_client;
mod headers;
pub mod response;

pub use github_client::GithubClient;
