use crate::mirror::{DestinationProjectSpec, Visibility};
use serde::Serialize;

const MERGE_METHOD: &str = "merge";
const PAGES_ACCESS_LEVEL: &str = "disabled";

/// Body of `POST /projects`. Every optional GitLab feature is switched off.
#[derive(Debug, Serialize)]
pub struct CreateProjectRequest {
    pub auto_devops_enabled: bool,
    pub container_registry_enabled: bool,
    pub default_branch: String,
    pub description: String,
    pub import_url: String,
    pub issues_enabled: bool,
    pub jobs_enabled: bool,
    pub lfs_enabled: bool,
    pub merge_method: String,
    pub merge_requests_enabled: bool,
    pub namespace_id: Option<u64>,
    pub packages_enabled: bool,
    pub pages_access_level: String,
    pub path: String,
    pub request_access_enabled: bool,
    pub shared_runners_enabled: bool,
    pub snippets_enabled: bool,
    pub tag_list: Vec<String>,
    pub visibility: Visibility,
    pub wiki_enabled: bool,
}

impl CreateProjectRequest {
    pub fn new(project: &DestinationProjectSpec) -> Self {
        Self {
            auto_devops_enabled: false,
            container_registry_enabled: false,
            default_branch: project.default_branch.to_owned(),
            description: project.description.to_owned(),
            import_url: project.import_url.to_owned(),
            issues_enabled: false,
            jobs_enabled: false,
            lfs_enabled: false,
            merge_method: MERGE_METHOD.to_owned(),
            merge_requests_enabled: false,
            namespace_id: project.namespace_id,
            packages_enabled: false,
            pages_access_level: PAGES_ACCESS_LEVEL.to_owned(),
            path: project.path.to_owned(),
            request_access_enabled: false,
            shared_runners_enabled: false,
            snippets_enabled: false,
            tag_list: project.tag_list.to_owned(),
            visibility: project.visibility,
            wiki_enabled: false,
        }
    }
}
