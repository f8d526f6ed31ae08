use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MirrorError {
    #[error("invalid repo name: '{0}'")]
    InvalidRepoIdentifier(String),
}
