use super::{hash::PathHash, mirror_request::MirrorRequest, source::SourceRepoMetadata};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    pub fn of(source: &SourceRepoMetadata) -> Self {
        if source.is_private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// The GitLab project derived from a source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationProjectSpec {
    pub path: String,
    pub description: String,
    pub import_url: String,
    pub default_branch: String,
    pub visibility: Visibility,
    pub namespace_id: Option<u64>,
    pub tag_list: Vec<String>,
}

impl DestinationProjectSpec {
    pub fn derive(
        request: &MirrorRequest,
        source: &SourceRepoMetadata,
        timestamp_millis: i64,
    ) -> Self {
        DestinationProjectSpec {
            path: project_path(&source.name, request.add_hash, timestamp_millis),
            description: description(
                &request.description_prefix,
                source.description.as_deref(),
                &request.description_suffix,
            ),
            import_url: source.clone_url.to_owned(),
            default_branch: source.default_branch.to_owned(),
            visibility: Visibility::of(source),
            namespace_id: request.namespace_id,
            tag_list: source.topics.to_owned(),
        }
    }
}

fn project_path(name: &str, add_hash: bool, timestamp_millis: i64) -> String {
    if add_hash {
        let hash = PathHash::create(name, timestamp_millis);
        format!("{}-{}", name, hash.value())
    } else {
        name.to_owned()
    }
}

// Both separators are always inserted, even around an empty prefix or suffix.
// A repository without a description renders as the literal `null`.
fn description(prefix: &str, description: Option<&str>, suffix: &str) -> String {
    format!("{} {} {}", prefix, description.unwrap_or("null"), suffix)
}
