mod project_response;

pub use project_response::ProjectResponse;
