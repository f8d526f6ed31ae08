mod cli;
mod config;
mod github;
mod gitlab;
mod http;
mod logger;
mod mirror;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use github::GithubClient;
use gitlab::GitlabClient;
use mirror::{MirrorError, MirrorRequest, ProjectCreator, RepoMetadataFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose, cli.quiet)?;

    match cli.command {
        Command::Mirror(args) => {
            let request = MirrorRequest::from(args);
            log::debug!("received args: {:?}", request);

            let github = GithubClient::new(&request.github_token);
            let gitlab = GitlabClient::new(&request.gitlab_token);

            run(request, &github, &gitlab).await
        }
    }
}

/// An invalid repo identifier is a handled usage error: it is logged and the
/// process still exits successfully. Upstream failures are returned to `main`.
async fn run<F, C>(request: MirrorRequest, github: &F, gitlab: &C) -> Result<()>
where
    F: RepoMetadataFetcher,
    C: ProjectCreator,
{
    match mirror::mirror(request, github, gitlab).await {
        Ok(_) => Ok(()),
        Err(err) => match err.downcast_ref::<MirrorError>() {
            Some(usage_error) => {
                log::error!("{}", usage_error);
                Ok(())
            }
            None => Err(err),
        },
    }
}
