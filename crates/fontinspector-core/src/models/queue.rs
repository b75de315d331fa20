use serde::{Deserialize, Serialize};

use super::inspection::{Inspection, InspectionStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: String,
    pub url: String,
    pub status: InspectionStatus,
    pub progress: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<&Inspection> for QueueEntry {
    fn from(inspection: &Inspection) -> Self {
        Self {
            id: inspection.id.clone(),
            url: inspection.url.clone(),
            status: inspection.status,
            progress: inspection.progress,
            error_message: inspection.error_message.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QueueCounts {
    pub pending: u64,
    pub processing: u64,
    pub completed: u64,
    pub failed: u64,
}

/// Queue state as the dashboard shows it. `visible` is false only when every
/// entry reached terminal success (an empty queue is hidden).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub entries: Vec<QueueEntry>,
    pub counts: QueueCounts,
    pub visible: bool,
}
