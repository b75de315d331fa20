use std::thread;
use std::time::Duration;

use anyhow::Result;
use fontinspector_core::FontInspector;

#[derive(Debug, serde::Serialize, Default)]
pub(super) struct QueueWorkReport {
    iterations: u32,
    fetched: usize,
    completed: usize,
    failed: usize,
}

pub(super) fn run_queue_worker(
    app: &FontInspector,
    iterations: u32,
    limit: usize,
    sleep_ms: u64,
    stop_when_idle: bool,
) -> Result<QueueWorkReport> {
    let mut total = QueueWorkReport::default();
    for i in 0..iterations {
        let report = app.run_pending(limit)?;
        total.iterations = i + 1;
        total.fetched += report.fetched;
        total.completed += report.completed;
        total.failed += report.failed;

        if stop_when_idle && report.fetched == 0 {
            break;
        }
        if i + 1 < iterations {
            thread::sleep(Duration::from_millis(sleep_ms));
        }
    }
    Ok(total)
}
