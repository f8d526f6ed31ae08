use crate::mirror::MirrorRequest;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Mirrors a repository.
    Mirror(MirrorArgs),
}

#[derive(Args)]
pub struct MirrorArgs {
    /// The GitHub repository to mirror, as `owner/name`.
    pub repo: String,

    /// The authentication token to use for GitHub.
    #[arg(long = "github-auth", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_auth: String,

    /// The authentication token to use for GitLab.
    #[arg(long = "gitlab-auth", env = "GITLAB_TOKEN", hide_env_values = true)]
    pub gitlab_auth: String,

    /// The namespace id to create the GitLab project under. Defaults to the authenticated user.
    #[arg(long)]
    pub namespace: Option<u64>,

    /// A prefix to prepend to the description.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub description_prefix: String,

    /// A suffix to append to the description.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub description_suffix: String,

    /// Add a hash to the end of the project name.
    #[arg(long)]
    pub hash: bool,
}

impl From<MirrorArgs> for MirrorRequest {
    fn from(args: MirrorArgs) -> Self {
        MirrorRequest {
            repo_identifier: args.repo,
            github_token: args.github_auth,
            gitlab_token: args.gitlab_auth,
            namespace_id: args.namespace,
            description_prefix: args.description_prefix,
            description_suffix: args.description_suffix,
            add_hash: args.hash,
        }
    }
}
