use chrono::Utc;
use rusqlite::{Row, params};

use crate::error::Result;
use crate::models::{RebuildRunRecord, RebuildRunStatus};

use super::{SqliteStateStore, usize_to_i64_saturating};

fn rebuild_run_from_row(row: &Row<'_>) -> rusqlite::Result<RebuildRunRecord> {
    let projects_rebuilt: i64 = row.get(3)?;
    Ok(RebuildRunRecord {
        run_id: row.get(0)?,
        started_at: row.get(1)?,
        ended_at: row.get(2)?,
        projects_rebuilt: usize::try_from(projects_rebuilt.max(0)).unwrap_or(0),
        status: row.get(4)?,
    })
}

impl SqliteStateStore {
    pub fn start_rebuild_run(&self, run_id: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO rebuild_runs(run_id, started_at, status)
                VALUES (?1, ?2, ?3)
                ",
                params![
                    run_id,
                    Utc::now().to_rfc3339(),
                    RebuildRunStatus::Running.as_str()
                ],
            )?;
            Ok(())
        })
    }

    pub fn finish_rebuild_run(
        &self,
        run_id: &str,
        projects_rebuilt: usize,
        status: RebuildRunStatus,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r"
                UPDATE rebuild_runs
                SET ended_at = ?2, projects_rebuilt = ?3, status = ?4
                WHERE run_id = ?1
                ",
                params![
                    run_id,
                    Utc::now().to_rfc3339(),
                    usize_to_i64_saturating(projects_rebuilt),
                    status.as_str()
                ],
            )?;
            Ok(())
        })
    }

    pub fn list_rebuild_runs(&self, limit: usize) -> Result<Vec<RebuildRunRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT run_id, started_at, ended_at, projects_rebuilt, status
                FROM rebuild_runs
                ORDER BY started_at DESC, run_id ASC
                LIMIT ?1
                ",
            )?;
            let rows = stmt.query_map(params![usize_to_i64_saturating(limit)], rebuild_run_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }
}
