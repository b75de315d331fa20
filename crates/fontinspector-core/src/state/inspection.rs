use chrono::Utc;
use rusqlite::{OptionalExtension, Row, params};

use crate::error::Result;
use crate::models::{Inspection, InspectionResult, InspectionStatus};

use super::{SqliteStateStore, usize_to_i64_saturating};

const INSPECTION_COLUMNS: &str =
    "id, url, project_id, status, progress, error_message, result_json, created_at, updated_at";

fn inspection_from_row(row: &Row<'_>) -> rusqlite::Result<Inspection> {
    let status_raw: String = row.get(3)?;
    let status = status_raw.parse::<InspectionStatus>().map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, err)),
        )
    })?;
    let result_json: Option<String> = row.get(6)?;
    let result = match result_json {
        Some(raw) => Some(
            serde_json::from_str::<InspectionResult>(&raw).map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(
                    6,
                    rusqlite::types::Type::Text,
                    Box::new(err),
                )
            })?,
        ),
        None => None,
    };
    let progress: i64 = row.get(4)?;
    Ok(Inspection {
        id: row.get(0)?,
        url: row.get(1)?,
        project_id: row.get(2)?,
        status,
        progress: u32::try_from(progress.max(0)).unwrap_or(0),
        error_message: row.get(5)?,
        result,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

impl SqliteStateStore {
    pub fn insert_inspection(&self, inspection: &Inspection) -> Result<()> {
        let result_json = inspection
            .result
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO inspections(id, url, project_id, status, progress, error_message, result_json, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                ",
                params![
                    inspection.id,
                    inspection.url,
                    inspection.project_id,
                    inspection.status.as_str(),
                    i64::from(inspection.progress),
                    inspection.error_message,
                    result_json,
                    inspection.created_at,
                    inspection.updated_at
                ],
            )?;
            Ok(())
        })
    }

    pub fn get_inspection(&self, id: &str) -> Result<Option<Inspection>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("SELECT {INSPECTION_COLUMNS} FROM inspections WHERE id = ?1"),
                    params![id],
                    inspection_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn list_inspections(&self) -> Result<Vec<Inspection>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {INSPECTION_COLUMNS} FROM inspections ORDER BY created_at ASC, id ASC"
            ))?;
            let rows = stmt.query_map([], inspection_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    pub fn list_pending_inspections(&self, limit: usize) -> Result<Vec<Inspection>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                r"
                SELECT {INSPECTION_COLUMNS}
                FROM inspections
                WHERE status = 'pending'
                ORDER BY created_at ASC, id ASC
                LIMIT ?1
                "
            ))?;
            let rows = stmt.query_map(params![usize_to_i64_saturating(limit)], inspection_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    /// All `(inspection_id, project_id)` pairs carrying a back-reference,
    /// in stable id order. Source material for `rebuild_links`.
    pub fn list_inspection_project_refs(&self) -> Result<Vec<(String, String)>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id, project_id
                FROM inspections
                WHERE project_id IS NOT NULL
                ORDER BY id ASC
                ",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    /// Set or clear the inspection's back-reference, stamping `updated_at`.
    pub fn set_inspection_project(&self, id: &str, project_id: Option<&str>) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                "UPDATE inspections SET project_id = ?2, updated_at = ?3 WHERE id = ?1",
                params![id, project_id, Utc::now().to_rfc3339()],
            )?;
            Ok(affected > 0)
        })
    }

    /// Status/progress stamp. `progress = None` keeps the stored value;
    /// `error_message = None` clears any stored message.
    pub fn update_inspection_progress(
        &self,
        id: &str,
        status: InspectionStatus,
        progress: Option<u32>,
        error_message: Option<&str>,
    ) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                r"
                UPDATE inspections
                SET status = ?2,
                    progress = COALESCE(?3, progress),
                    error_message = ?4,
                    updated_at = ?5
                WHERE id = ?1
                ",
                params![
                    id,
                    status.as_str(),
                    progress.map(i64::from),
                    error_message,
                    Utc::now().to_rfc3339()
                ],
            )?;
            Ok(affected > 0)
        })
    }

    pub fn complete_inspection(&self, id: &str, result: &InspectionResult) -> Result<bool> {
        let result_json = serde_json::to_string(result)?;
        self.with_conn(|conn| {
            let affected = conn.execute(
                r"
                UPDATE inspections
                SET status = 'completed',
                    progress = 100,
                    error_message = NULL,
                    result_json = ?2,
                    updated_at = ?3
                WHERE id = ?1
                ",
                params![id, result_json, Utc::now().to_rfc3339()],
            )?;
            Ok(affected > 0)
        })
    }

    pub fn remove_inspection(&self, id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM inspections WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }
}
