use serde::{Deserialize, Serialize};

/// Outcome of a `link` call. `added` is false when the inspection id was
/// already a member of the project's set (the add path has set semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkChange {
    pub project_id: String,
    pub inspection_id: String,
    pub added: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_project_id: Option<String>,
}

/// Outcome of an `unlink` call. `cleared` is false when the inspection's
/// back-reference pointed at a different project and was left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlinkChange {
    pub project_id: String,
    pub inspection_id: String,
    pub removed: bool,
    pub cleared: bool,
}
