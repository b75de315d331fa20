use chrono::Utc;
use rusqlite::{OptionalExtension, Row, params};

use crate::error::Result;
use crate::models::Project;

use super::SqliteStateStore;

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let inspection_ids_json: String = row.get(2)?;
    let inspection_ids = serde_json::from_str(&inspection_ids_json).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        inspection_ids,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

impl SqliteStateStore {
    pub fn insert_project(&self, project: &Project) -> Result<()> {
        let inspection_ids_json = serde_json::to_string(&project.inspection_ids)?;
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO projects(id, name, inspection_ids_json, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
                params![
                    project.id,
                    project.name,
                    inspection_ids_json,
                    project.created_at,
                    project.updated_at
                ],
            )?;
            Ok(())
        })
    }

    pub fn get_project(&self, id: &str) -> Result<Option<Project>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    r"
                    SELECT id, name, inspection_ids_json, created_at, updated_at
                    FROM projects
                    WHERE id = ?1
                    ",
                    params![id],
                    project_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id, name, inspection_ids_json, created_at, updated_at
                FROM projects
                ORDER BY created_at ASC, id ASC
                ",
            )?;
            let rows = stmt.query_map([], project_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    /// Overwrite the project's inspection set wholesale, stamping `updated_at`.
    pub fn set_project_inspection_ids(&self, id: &str, inspection_ids: &[String]) -> Result<bool> {
        let inspection_ids_json = serde_json::to_string(inspection_ids)?;
        self.with_conn(|conn| {
            let affected = conn.execute(
                "UPDATE projects SET inspection_ids_json = ?2, updated_at = ?3 WHERE id = ?1",
                params![id, inspection_ids_json, Utc::now().to_rfc3339()],
            )?;
            Ok(affected > 0)
        })
    }

    pub fn touch_project(&self, id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                "UPDATE projects SET updated_at = ?2 WHERE id = ?1",
                params![id, Utc::now().to_rfc3339()],
            )?;
            Ok(affected > 0)
        })
    }

    pub fn remove_project(&self, id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }
}
