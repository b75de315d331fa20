use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RebuildRunStatus {
    Running,
    DryRun,
    Success,
    Failed,
}

impl RebuildRunStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::DryRun => "dry_run",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for RebuildRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RebuildRunStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "running" => Ok(Self::Running),
            "dry_run" => Ok(Self::DryRun),
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            other => Err(format!("unknown rebuild run status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildReport {
    pub run_id: String,
    pub projects_rebuilt: usize,
    pub inspections_linked: usize,
    pub orphaned_refs: usize,
    pub orphan_sample: Vec<String>,
    pub dry_run: bool,
    pub status: RebuildRunStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildOptions {
    pub dry_run: bool,
    pub max_orphan_sample: usize,
}

impl Default for RebuildOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            max_orphan_sample: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildRunRecord {
    pub run_id: String,
    pub started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    pub projects_rebuilt: usize,
    pub status: String,
}
