use crate::error::Result;
use crate::models::{InspectionStatus, QueueCounts, QueueEntry, QueueSnapshot};

use super::FontInspector;

impl FontInspector {
    /// Queue state for the dashboard: all inspections, or one project's
    /// (resolved through its set). The queue is hidden exactly when every
    /// entry reached terminal success; failed entries keep it visible.
    pub fn queue_snapshot(&self, project_id: Option<&str>) -> Result<QueueSnapshot> {
        let inspections = match project_id {
            Some(project_id) => self.list_project_inspections(project_id)?,
            None => self.state.list_inspections()?,
        };

        let mut counts = QueueCounts::default();
        for inspection in &inspections {
            match inspection.status {
                InspectionStatus::Pending => counts.pending += 1,
                InspectionStatus::Processing => counts.processing += 1,
                InspectionStatus::Completed => counts.completed += 1,
                InspectionStatus::Failed => counts.failed += 1,
            }
        }

        let visible = inspections
            .iter()
            .any(|inspection| !inspection.status.is_terminal_success());
        let entries = inspections.iter().map(QueueEntry::from).collect();

        Ok(QueueSnapshot {
            entries,
            counts,
            visible,
        })
    }
}
