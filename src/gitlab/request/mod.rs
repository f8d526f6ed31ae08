mod create_project_request;

pub use create_project_request::CreateProjectRequest;
