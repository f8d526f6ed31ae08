use super::error::MirrorError;
use std::str::FromStr;

/// A GitHub `owner/name` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentifier {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoIdentifier {
    type Err = MirrorError;

    /// Anything after the second segment is ignored, so `a/b/c` names `a/b`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut segments = value.split('/');

        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(RepoIdentifier {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => Err(MirrorError::InvalidRepoIdentifier(value.to_owned())),
        }
    }
}
