use std::time::Instant;

use chrono::Utc;

use crate::error::{InspectorError, Result};
use crate::extract::{FontScan, scan_html};
use crate::models::{Inspection, InspectionResult, InspectionStatus, RunReport};

use super::FontInspector;

impl FontInspector {
    /// Drive one inspection through its lifecycle: mark it processing, fetch
    /// the page, extract font evidence, persist the result. Any failure marks
    /// the inspection failed (keeping its last progress checkpoint) and is
    /// re-thrown to the caller.
    pub fn run_inspection(&self, id: &str) -> Result<Inspection> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let result = (|| -> Result<Inspection> {
            let id = id.trim();
            let inspection = self.get_inspection_by_id(id)?;
            if inspection.status == InspectionStatus::Processing {
                return Err(InspectorError::Conflict(format!(
                    "inspection already processing: {id}"
                )));
            }

            self.state
                .update_inspection_progress(id, InspectionStatus::Processing, Some(10), None)?;

            match self.execute_inspection(id, &inspection.url) {
                Ok(result) => {
                    self.state.complete_inspection(id, &result)?;
                    self.get_inspection_by_id(id)
                }
                Err(err) => {
                    let _ = self.state.update_inspection_progress(
                        id,
                        InspectionStatus::Failed,
                        None,
                        Some(&err.to_string()),
                    );
                    Err(err)
                }
            }
        })();

        match &result {
            Ok(inspection) => {
                self.log_request_status(
                    request_id,
                    "inspection.run",
                    "ok",
                    started,
                    Some(inspection.id.clone()),
                    Some(serde_json::json!({
                        "url": inspection.url,
                        "font_families": inspection
                            .result
                            .as_ref()
                            .map_or(0, |result| result.font_families.len()),
                    })),
                );
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "inspection.run",
                    started,
                    Some(id.to_string()),
                    err,
                    None,
                );
            }
        }
        result
    }

    fn execute_inspection(&self, id: &str, url: &str) -> Result<InspectionResult> {
        let page = self.fetcher.fetch_page(url)?;
        self.state
            .update_inspection_progress(id, InspectionStatus::Processing, Some(40), None)?;

        let html_scan = scan_html(&page.body, &page.final_url);
        let mut font_scan = FontScan::default();
        for block in &html_scan.style_blocks {
            font_scan.scan_css(block);
        }
        for attribute in &html_scan.style_attributes {
            font_scan.scan_css(attribute);
        }
        for stylesheet_url in html_scan
            .stylesheet_urls
            .iter()
            .take(self.config.runner.max_stylesheets)
        {
            // One bad stylesheet must not fail the page.
            if let Ok(body) = self.fetcher.fetch_stylesheet(stylesheet_url) {
                font_scan.scan_css(&body);
            }
        }
        self.state
            .update_inspection_progress(id, InspectionStatus::Processing, Some(80), None)?;

        let (font_families, font_faces) = font_scan.finish();
        Ok(InspectionResult {
            page_hash: blake3::hash(page.body.as_bytes()).to_hex().to_string(),
            font_families,
            font_faces,
            stylesheets: html_scan
                .stylesheet_urls
                .iter()
                .map(ToString::to_string)
                .collect(),
            fetched_at: Utc::now().to_rfc3339(),
        })
    }

    /// Run up to `limit` pending inspections, oldest first. One inspection's
    /// failure does not abort the batch.
    pub fn run_pending(&self, limit: usize) -> Result<RunReport> {
        let pending = self.state.list_pending_inspections(limit)?;
        let mut report = RunReport {
            fetched: pending.len(),
            ..RunReport::default()
        };

        for inspection in pending {
            match self.run_inspection(&inspection.id) {
                Ok(_) => report.completed += 1,
                Err(_) => report.failed += 1,
            }
        }

        Ok(report)
    }
}
