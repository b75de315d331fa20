use crate::error::Result;
use crate::jsonl::parse_jsonl_tolerant;
use crate::models::RequestLogEntry;
use crate::paths;

use super::FontInspector;

impl FontInspector {
    /// Most recent request-log entries, newest first, optionally filtered by
    /// operation and status. Bad lines in the log are skipped, not errors.
    pub fn list_request_logs_filtered(
        &self,
        limit: usize,
        operation: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<RequestLogEntry>> {
        let path = paths::request_log_path(&self.root);
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut entries = parse_jsonl_tolerant::<RequestLogEntry>(&raw)
            .into_iter()
            .filter(|entry| operation.is_none_or(|operation| entry.operation == operation))
            .filter(|entry| status.is_none_or(|status| entry.status == status))
            .collect::<Vec<_>>();
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }
}
