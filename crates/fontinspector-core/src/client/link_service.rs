use std::time::Instant;

use crate::error::{InspectorError, Result};
use crate::models::{LinkChange, Project, UnlinkChange};

use super::FontInspector;

fn non_empty_id<'a>(raw: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InspectorError::Validation(format!(
            "{what} must not be empty"
        )));
    }
    Ok(trimmed)
}

impl FontInspector {
    /// Add the inspection to the project's set and point the inspection back
    /// at the project. The two documents are written independently: a failure
    /// after the project write leaves the link half-applied, and nothing here
    /// rolls that back. `rebuild_links` is the repair path.
    pub fn link(&self, project_id: &str, inspection_id: &str) -> Result<LinkChange> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let result = (|| -> Result<LinkChange> {
            let project_id = non_empty_id(project_id, "project id")?;
            let inspection_id = non_empty_id(inspection_id, "inspection id")?;

            let project = self.require_project(project_id)?;
            let inspection = self
                .state
                .get_inspection(inspection_id)?
                .ok_or_else(|| InspectorError::NotFound(format!("inspection: {inspection_id}")))?;

            let added = !project.contains_inspection(inspection_id);
            if added {
                let mut ids = project.inspection_ids;
                ids.push(inspection_id.to_string());
                self.state.set_project_inspection_ids(project_id, &ids)?;
            } else {
                self.state.touch_project(project_id)?;
            }

            self.state
                .set_inspection_project(inspection_id, Some(project_id))?;

            Ok(LinkChange {
                project_id: project_id.to_string(),
                inspection_id: inspection_id.to_string(),
                added,
                previous_project_id: inspection
                    .project_id
                    .filter(|previous| previous != project_id),
            })
        })();

        match &result {
            Ok(change) => {
                self.log_request_status(
                    request_id,
                    "link.add",
                    "ok",
                    started,
                    Some(change.project_id.clone()),
                    Some(serde_json::json!({
                        "inspection_id": change.inspection_id,
                        "added": change.added,
                    })),
                );
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "link.add",
                    started,
                    Some(project_id.to_string()),
                    err,
                    Some(serde_json::json!({ "inspection_id": inspection_id })),
                );
            }
        }
        result
    }

    /// Remove the inspection from the project's set; clear the back-reference
    /// only when it currently points at this project. Same two-document
    /// exposure as `link`.
    pub fn unlink(&self, project_id: &str, inspection_id: &str) -> Result<UnlinkChange> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let result = (|| -> Result<UnlinkChange> {
            let project_id = non_empty_id(project_id, "project id")?;
            let inspection_id = non_empty_id(inspection_id, "inspection id")?;

            let project = self.require_project(project_id)?;
            let inspection = self
                .state
                .get_inspection(inspection_id)?
                .ok_or_else(|| InspectorError::NotFound(format!("inspection: {inspection_id}")))?;

            let removed = project.contains_inspection(inspection_id);
            if removed {
                let ids = project
                    .inspection_ids
                    .into_iter()
                    .filter(|id| id != inspection_id)
                    .collect::<Vec<_>>();
                self.state.set_project_inspection_ids(project_id, &ids)?;
            } else {
                self.state.touch_project(project_id)?;
            }

            let cleared = inspection.project_id.as_deref() == Some(project_id);
            if cleared {
                self.state.set_inspection_project(inspection_id, None)?;
            }

            Ok(UnlinkChange {
                project_id: project_id.to_string(),
                inspection_id: inspection_id.to_string(),
                removed,
                cleared,
            })
        })();

        match &result {
            Ok(change) => {
                self.log_request_status(
                    request_id,
                    "link.remove",
                    "ok",
                    started,
                    Some(change.project_id.clone()),
                    Some(serde_json::json!({
                        "inspection_id": change.inspection_id,
                        "removed": change.removed,
                        "cleared": change.cleared,
                    })),
                );
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "link.remove",
                    started,
                    Some(project_id.to_string()),
                    err,
                    Some(serde_json::json!({ "inspection_id": inspection_id })),
                );
            }
        }
        result
    }

    pub(super) fn require_project(&self, project_id: &str) -> Result<Project> {
        self.state
            .get_project(project_id)?
            .ok_or_else(|| InspectorError::NotFound(format!("project: {project_id}")))
    }
}
