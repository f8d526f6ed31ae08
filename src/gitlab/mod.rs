pub mod gitlab_client;
mod headers;
pub mod request;
pub mod response;

pub use gitlab_client::GitlabClient;
