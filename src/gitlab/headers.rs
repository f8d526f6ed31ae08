use crate::config::USER_AGENT as USER_AGENT_VALUE;
use reqwest::{header::USER_AGENT, RequestBuilder};

pub trait Headers {
    fn gitlab_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn gitlab_headers(self, token: &str) -> RequestBuilder {
        self.header("private-token", token)
            .header(USER_AGENT, USER_AGENT_VALUE)
    }
}
