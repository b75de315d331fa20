mod inspection;
mod link;
mod project;
mod queue;
mod rebuild;
mod trace;

pub use inspection::{
    FontFaceRule, FontFamilyUsage, Inspection, InspectionResult, InspectionStatus, RunReport,
};
pub use link::{LinkChange, UnlinkChange};
pub use project::Project;
pub use queue::{QueueCounts, QueueEntry, QueueSnapshot};
pub use rebuild::{RebuildOptions, RebuildReport, RebuildRunRecord, RebuildRunStatus};
pub use trace::RequestLogEntry;
