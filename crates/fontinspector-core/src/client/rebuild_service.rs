use std::collections::BTreeMap;
use std::time::Instant;

use crate::error::Result;
use crate::models::{RebuildOptions, RebuildReport, RebuildRunRecord, RebuildRunStatus};

use super::FontInspector;

fn push_orphan_sample(sample: &mut Vec<String>, project_id: &str, max_sample: usize) {
    if sample.len() < max_sample {
        sample.push(project_id.to_string());
    }
}

impl FontInspector {
    pub fn rebuild_links(&self) -> Result<RebuildReport> {
        self.rebuild_links_with_options(RebuildOptions::default())
    }

    /// Recompute every referenced project's inspection set from the
    /// inspections' back-references, overwriting each set wholesale.
    /// Projects nothing references are left untouched; this is a repair
    /// pass over the forward direction only.
    pub fn rebuild_links_with_options(&self, options: RebuildOptions) -> Result<RebuildReport> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        self.state.start_rebuild_run(&run_id)?;

        let result = (|| -> Result<RebuildReport> {
            let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for (inspection_id, project_id) in self.state.list_inspection_project_refs()? {
                grouped.entry(project_id).or_default().push(inspection_id);
            }

            let mut projects_rebuilt = 0usize;
            let mut inspections_linked = 0usize;
            let mut orphaned_refs = 0usize;
            let mut orphan_sample = Vec::<String>::new();

            for (project_id, mut inspection_ids) in grouped {
                inspection_ids.sort();
                inspection_ids.dedup();

                if self.state.get_project(&project_id)?.is_none() {
                    orphaned_refs += inspection_ids.len();
                    push_orphan_sample(&mut orphan_sample, &project_id, options.max_orphan_sample);
                    continue;
                }

                inspections_linked += inspection_ids.len();
                if !options.dry_run {
                    self.state
                        .set_project_inspection_ids(&project_id, &inspection_ids)?;
                }
                projects_rebuilt += 1;
            }

            Ok(RebuildReport {
                run_id: run_id.clone(),
                projects_rebuilt,
                inspections_linked,
                orphaned_refs,
                orphan_sample,
                dry_run: options.dry_run,
                status: if options.dry_run {
                    RebuildRunStatus::DryRun
                } else {
                    RebuildRunStatus::Success
                },
            })
        })();

        match &result {
            Ok(report) => {
                self.state
                    .finish_rebuild_run(&run_id, report.projects_rebuilt, report.status)?;
            }
            Err(_) => {
                let _ = self
                    .state
                    .finish_rebuild_run(&run_id, 0, RebuildRunStatus::Failed);
            }
        }

        match &result {
            Ok(report) => {
                self.log_request_status(
                    request_id,
                    "link.rebuild",
                    report.status.as_str(),
                    started,
                    None,
                    Some(serde_json::json!({
                        "run_id": report.run_id,
                        "dry_run": report.dry_run,
                        "projects_rebuilt": report.projects_rebuilt,
                        "inspections_linked": report.inspections_linked,
                        "orphaned_refs": report.orphaned_refs,
                    })),
                );
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "link.rebuild",
                    started,
                    None,
                    err,
                    Some(serde_json::json!({
                        "run_id": run_id,
                        "dry_run": options.dry_run,
                        "max_orphan_sample": options.max_orphan_sample,
                    })),
                );
            }
        }

        result
    }

    pub fn list_rebuild_runs(&self, limit: usize) -> Result<Vec<RebuildRunRecord>> {
        self.state.list_rebuild_runs(limit)
    }
}
