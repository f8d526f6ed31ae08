use super::{headers::Headers, request::CreateProjectRequest, response::ProjectResponse};
use crate::{
    config::GITLAB_API_URL,
    http::{self, HttpClient, ResponseHandler},
    mirror::{DestinationProjectSpec, MirrorResult, ProjectCreator},
};
use anyhow::Result;

pub struct GitlabClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl GitlabClient {
    pub fn new(token: impl Into<String>) -> Self {
        GitlabClient::with_base_url(GITLAB_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        GitlabClient {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub async fn post_project(&self, request: &CreateProjectRequest) -> Result<ProjectResponse> {
        let uri = format!("{}/projects", self.base_url);
        log::debug!("creating project at {}: {:?}", uri, request);

        let response = self
            .http
            .post(&uri)
            .gitlab_headers(&self.token)
            .json(request)
            .send()
            .await
            .handle()
            .await?;

        let project = http::parse::<ProjectResponse>(&response)?;

        Ok(project)
    }
}

impl ProjectCreator for GitlabClient {
    async fn create_project(&self, project: &DestinationProjectSpec) -> Result<MirrorResult> {
        let request = CreateProjectRequest::new(project);
        let created = self.post_project(&request).await?;

        Ok(MirrorResult {
            project_id: created.id,
            project_url: created.web_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::USER_AGENT;
    use crate::mirror::Visibility;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn project() -> DestinationProjectSpec {
        DestinationProjectSpec {
            path: "x".to_owned(),
            description: " d ".to_owned(),
            import_url: "u".to_owned(),
            default_branch: "main".to_owned(),
            visibility: Visibility::Private,
            namespace_id: None,
            tag_list: vec![],
        }
    }

    #[tokio::test]
    async fn should_create_project() -> Result<()> {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/projects")
            .match_header("private-token", "test_token")
            .match_header("user-agent", USER_AGENT)
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "path": "x",
                "visibility": "private",
                "import_url": "u",
                "tag_list": []
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 42, "web_url": "https://gitlab.com/me/x", "name": "x"}"#)
            .create_async()
            .await;

        let client = GitlabClient::with_base_url(server.url(), "test_token");
        let result = client.create_project(&project()).await?;

        m.assert_async().await;
        assert_eq!(
            result,
            MirrorResult {
                project_id: 42,
                project_url: "https://gitlab.com/me/x".to_owned(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_gitlab_rejects_the_project() -> Result<()> {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/projects")
            .with_status(400)
            .with_body(r#"{"message":{"path":["has already been taken"]}}"#)
            .create_async()
            .await;

        let client = GitlabClient::with_base_url(server.url(), "test_token");
        let err = client.create_project(&project()).await.unwrap_err();

        m.assert_async().await;
        match err.downcast_ref::<http::Error>() {
            Some(http::Error::GenericResponseError { status, message }) => {
                assert_eq!(*status, 400);
                assert!(message.contains("has already been taken"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        Ok(())
    }
}
