use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub id: u64,
    pub web_url: String,
}
