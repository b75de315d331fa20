use std::time::Instant;

use chrono::Utc;

use crate::error::{InspectorError, Result};
use crate::models::Project;

use super::FontInspector;

impl FontInspector {
    /// Create a project and one pending inspection per URL, linking each
    /// through the steady-state link path (not a bulk write).
    pub fn create_project(&self, name: &str, urls: &[String]) -> Result<Project> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let result = (|| -> Result<Project> {
            let name = name.trim();
            if name.is_empty() {
                return Err(InspectorError::Validation(
                    "project name must not be empty".to_string(),
                ));
            }

            let now = Utc::now().to_rfc3339();
            let project = Project {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                inspection_ids: Vec::new(),
                created_at: now.clone(),
                updated_at: now,
            };
            self.state.insert_project(&project)?;

            for url in urls {
                let inspection = self.create_inspection(url, None)?;
                self.link(&project.id, &inspection.id)?;
            }

            self.require_project(&project.id)
        })();

        match &result {
            Ok(project) => {
                self.log_request_status(
                    request_id,
                    "project.create",
                    "ok",
                    started,
                    Some(project.id.clone()),
                    Some(serde_json::json!({
                        "name": project.name,
                        "inspections": project.inspection_ids.len(),
                    })),
                );
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "project.create",
                    started,
                    None,
                    err,
                    Some(serde_json::json!({ "urls": urls.len() })),
                );
            }
        }
        result
    }

    pub fn get_project_by_id(&self, id: &str) -> Result<Project> {
        self.require_project(id.trim())
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.state.list_projects()
    }

    /// Remove the project after clearing, document by document, the
    /// back-reference of every inspection that points at it. A failure
    /// partway leaves the remaining back-references dangling for
    /// `rebuild_links` to report.
    pub fn delete_project(&self, id: &str) -> Result<bool> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let result = (|| -> Result<bool> {
            let id = id.trim();
            let _ = self.require_project(id)?;

            for (inspection_id, project_id) in self.state.list_inspection_project_refs()? {
                if project_id == id {
                    self.state.set_inspection_project(&inspection_id, None)?;
                }
            }
            self.state.remove_project(id)
        })();

        match &result {
            Ok(deleted) => {
                self.log_request_status(
                    request_id,
                    "project.delete",
                    "ok",
                    started,
                    Some(id.to_string()),
                    Some(serde_json::json!({ "deleted": deleted })),
                );
            }
            Err(err) => {
                self.log_request_error(request_id, "project.delete", started, Some(id.to_string()), err, None);
            }
        }
        result
    }
}
