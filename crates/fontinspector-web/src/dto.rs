use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct InspectionQuery {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct QueueQuery {
    pub project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteProjectRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateInspectionRequest {
    pub url: String,
    pub project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RunInspectionRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    pub project_id: String,
    pub inspection_id: String,
}

#[derive(Debug, Deserialize)]
pub struct RebuildRequest {
    #[serde(default)]
    pub dry_run: bool,
}
