use serde::{Deserialize, Serialize};

/// A user-defined grouping of page inspections.
///
/// `inspection_ids` is kept with set semantics: membership is what matters,
/// order carries no meaning and duplicates are invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub inspection_ids: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    #[must_use]
    pub fn contains_inspection(&self, inspection_id: &str) -> bool {
        self.inspection_ids.iter().any(|id| id == inspection_id)
    }
}
