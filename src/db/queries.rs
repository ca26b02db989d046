use crate::db::models::{ExportRow, StoredPlan};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::now_iso;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::HashSet;

/// Store a planning response; it becomes the current plan.
pub fn insert_plan(conn: &Connection, source: &str, payload: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO plans (created_at, source, payload) VALUES (?1, ?2, ?3)",
        params![now_iso(), source, payload],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_plan(row: &Row) -> Result<StoredPlan> {
    Ok(StoredPlan {
        id: row.get("id")?,
        created_at: row.get("created_at")?,
        source: row.get("source")?,
        payload: row.get("payload")?,
    })
}

pub fn load_latest_plan(pool: &mut DbPool) -> AppResult<Option<StoredPlan>> {
    let plan = pool
        .conn
        .query_row(
            "SELECT id, created_at, source, payload FROM plans ORDER BY id DESC LIMIT 1",
            [],
            map_plan,
        )
        .optional()?;
    Ok(plan)
}

pub fn count_plans(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM plans", [], |row| row.get(0))?)
}

pub fn load_exported_keys(conn: &Connection) -> AppResult<HashSet<String>> {
    let mut stmt = conn.prepare("SELECT log_key FROM exports")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = HashSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

pub fn mark_exported(conn: &Connection, log_key: &str, date: &str, file: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO exports (log_key, date, file, created_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(log_key) DO UPDATE SET file = excluded.file, created_at = excluded.created_at",
        params![log_key, date, file, now_iso()],
    )?;
    Ok(())
}

pub fn list_exports(conn: &Connection) -> AppResult<Vec<ExportRow>> {
    let mut stmt =
        conn.prepare("SELECT log_key, date, file, created_at FROM exports ORDER BY date, id")?;
    let rows = stmt.query_map([], |row| {
        Ok(ExportRow {
            log_key: row.get(0)?,
            date: row.get(1)?,
            file: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
