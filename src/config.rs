pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Preview media type that makes GitHub include `topics` in repository payloads.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.mercy-preview+json";

pub const GITLAB_API_URL: &str = "https://gitlab.com/api/v4";

/// `<tool-name> (<version>) - <homepage>`, sent to both forges.
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " (",
    env!("CARGO_PKG_VERSION"),
    ") - ",
    env!("CARGO_PKG_HOMEPAGE")
);
