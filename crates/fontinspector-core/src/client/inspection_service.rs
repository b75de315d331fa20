use std::time::Instant;

use chrono::Utc;

use crate::error::{InspectorError, Result};
use crate::fetch::parse_target_url;
use crate::models::{Inspection, InspectionStatus};

use super::FontInspector;

impl FontInspector {
    pub fn create_inspection(&self, url: &str, project_id: Option<&str>) -> Result<Inspection> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let result = (|| -> Result<Inspection> {
            let target = parse_target_url(url)?;
            let now = Utc::now().to_rfc3339();
            let inspection = Inspection {
                id: uuid::Uuid::new_v4().to_string(),
                url: target.to_string(),
                project_id: None,
                status: InspectionStatus::Pending,
                progress: 0,
                error_message: None,
                result: None,
                created_at: now.clone(),
                updated_at: now,
            };
            self.state.insert_inspection(&inspection)?;

            if let Some(project_id) = project_id {
                self.link(project_id, &inspection.id)?;
                return self.get_inspection_by_id(&inspection.id);
            }
            Ok(inspection)
        })();

        match &result {
            Ok(inspection) => {
                self.log_request_status(
                    request_id,
                    "inspection.create",
                    "ok",
                    started,
                    Some(inspection.id.clone()),
                    Some(serde_json::json!({ "url": inspection.url })),
                );
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "inspection.create",
                    started,
                    None,
                    err,
                    Some(serde_json::json!({ "url": url })),
                );
            }
        }
        result
    }

    pub fn get_inspection_by_id(&self, id: &str) -> Result<Inspection> {
        let id = id.trim();
        self.state
            .get_inspection(id)?
            .ok_or_else(|| InspectorError::NotFound(format!("inspection: {id}")))
    }

    pub fn list_inspections(&self) -> Result<Vec<Inspection>> {
        self.state.list_inspections()
    }

    /// The project's inspections, resolved through its set. Dangling ids
    /// (members whose document is gone) are skipped, not errors.
    pub fn list_project_inspections(&self, project_id: &str) -> Result<Vec<Inspection>> {
        let project = self.require_project(project_id.trim())?;
        let mut out = Vec::with_capacity(project.inspection_ids.len());
        for id in &project.inspection_ids {
            if let Some(inspection) = self.state.get_inspection(id)? {
                out.push(inspection);
            }
        }
        Ok(out)
    }

    pub fn update_inspection_progress(
        &self,
        id: &str,
        status: InspectionStatus,
        progress: Option<u32>,
        error_message: Option<&str>,
    ) -> Result<Inspection> {
        let id = id.trim();
        if let Some(progress) = progress
            && progress > 100
        {
            return Err(InspectorError::Validation(format!(
                "progress must be within 0..=100, got {progress}"
            )));
        }
        if !self
            .state
            .update_inspection_progress(id, status, progress, error_message)?
        {
            return Err(InspectorError::NotFound(format!("inspection: {id}")));
        }
        self.get_inspection_by_id(id)
    }

    /// Remove the inspection, pruning it from the owning project's set first
    /// when a back-reference exists. Both writes are independent documents;
    /// the prune is best-effort in the same way `unlink` is.
    pub fn delete_inspection(&self, id: &str) -> Result<bool> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let result = (|| -> Result<bool> {
            let id = id.trim();
            let inspection = self.get_inspection_by_id(id)?;

            if let Some(project_id) = inspection.project_id.as_deref()
                && let Some(project) = self.state.get_project(project_id)?
                && project.contains_inspection(id)
            {
                let ids = project
                    .inspection_ids
                    .into_iter()
                    .filter(|member| member != id)
                    .collect::<Vec<_>>();
                self.state.set_project_inspection_ids(project_id, &ids)?;
            }
            self.state.remove_inspection(id)
        })();

        match &result {
            Ok(deleted) => {
                self.log_request_status(
                    request_id,
                    "inspection.delete",
                    "ok",
                    started,
                    Some(id.to_string()),
                    Some(serde_json::json!({ "deleted": deleted })),
                );
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "inspection.delete",
                    started,
                    Some(id.to_string()),
                    err,
                    None,
                );
            }
        }
        result
    }
}
