use super::{headers::Headers, response::RepoResponse};
use crate::{
    config::GITHUB_API_URL,
    http::{self, HttpClient, ResponseHandler},
    mirror::{RepoMetadataFetcher, SourceRepoMetadata},
};
use anyhow::Result;

pub struct GithubClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        GithubClient::with_base_url(GITHUB_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<RepoResponse> {
        let uri = format!("{}/repos/{}/{}", self.base_url, owner, repo);
        log::debug!("fetching {}", uri);

        let response = self
            .http
            .get(&uri)
            .github_headers(&self.token)
            .send()
            .await
            .handle()
            .await?;

        let repo = http::parse::<RepoResponse>(&response)?;

        Ok(repo)
    }
}

impl RepoMetadataFetcher for GithubClient {
    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<SourceRepoMetadata> {
        let repo = self.get_repo(owner, name).await?;

        Ok(repo.into())
    }
}
