use std::fmt;

/// Everything a single mirror run needs, built once from the command line.
#[derive(Clone)]
pub struct MirrorRequest {
    pub repo_identifier: String,
    pub github_token: String,
    pub gitlab_token: String,
    pub namespace_id: Option<u64>,
    pub description_prefix: String,
    pub description_suffix: String,
    pub add_hash: bool,
}

impl fmt::Debug for MirrorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MirrorRequest")
            .field("repo_identifier", &self.repo_identifier)
            .field("github_token", &"***")
            .field("gitlab_token", &"***")
            .field("namespace_id", &self.namespace_id)
            .field("description_prefix", &self.description_prefix)
            .field("description_suffix", &self.description_suffix)
            .field("add_hash", &self.add_hash)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_redact_tokens_in_debug_output() {
        let request = MirrorRequest {
            repo_identifier: "octocat/hello".to_owned(),
            github_token: "ghp_secret".to_owned(),
            gitlab_token: "glpat-secret".to_owned(),
            namespace_id: Some(5),
            description_prefix: String::new(),
            description_suffix: String::new(),
            add_hash: false,
        };

        let rendered = format!("{:?}", request);

        assert!(rendered.contains("octocat/hello"));
        assert!(!rendered.contains("ghp_secret"));
        assert!(!rendered.contains("glpat-secret"));
    }
}
