mod destination;
mod error;
mod hash;
mod mirror_request;
mod repo_identifier;
mod source;

pub use destination::{DestinationProjectSpec, Visibility};
pub use error::MirrorError;
pub use mirror_request::MirrorRequest;
pub use repo_identifier::RepoIdentifier;
pub use source::SourceRepoMetadata;

use anyhow::{Context, Result};
use chrono::Utc;

/// Reads source repository metadata.
pub trait RepoMetadataFetcher {
    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<SourceRepoMetadata>;
}

/// Creates the destination project.
pub trait ProjectCreator {
    async fn create_project(&self, project: &DestinationProjectSpec) -> Result<MirrorResult>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorResult {
    pub project_id: u64,
    pub project_url: String,
}

/// Mirrors one GitHub repository into a new GitLab project.
///
/// An invalid identifier fails with [`MirrorError::InvalidRepoIdentifier`]
/// before any collaborator is called. Collaborator failures are returned as-is.
pub async fn mirror<F, C>(request: MirrorRequest, github: &F, gitlab: &C) -> Result<MirrorResult>
where
    F: RepoMetadataFetcher,
    C: ProjectCreator,
{
    let id: RepoIdentifier = request.repo_identifier.parse()?;

    let repo = github
        .fetch_repo(&id.owner, &id.name)
        .await
        .with_context(|| format!("Cannot fetch github repository {}/{}", id.owner, id.name))?;
    log::info!(
        "creating mirror for github repository with name '{}': {}",
        repo.full_name,
        repo.html_url
    );

    let project = DestinationProjectSpec::derive(&request, &repo, Utc::now().timestamp_millis());
    log::debug!("destination project: {:?}", project);

    let created = gitlab
        .create_project(&project)
        .await
        .with_context(|| format!("Cannot create gitlab project {}", project.path))?;
    log::info!(
        "created gitlab project with id '{}': {}",
        created.project_id,
        created.project_url
    );

    Ok(created)
}
