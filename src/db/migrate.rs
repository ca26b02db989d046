use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Planning responses: append-only, the newest row supersedes the others.
fn create_plans_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS plans (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at  TEXT NOT NULL,
            source      TEXT NOT NULL DEFAULT 'file' CHECK(source IN ('service','file')),
            payload     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Identities of daily logs already written as snapshots.
fn create_exports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS exports (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            log_key     TEXT NOT NULL UNIQUE,
            date        TEXT NOT NULL,
            file        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_exports_date ON exports(date);
        "#,
    )?;
    Ok(())
}

pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "plans")? {
        create_plans_table(conn)?;
        success("Created plans table.");
    }

    if !table_exists(conn, "exports")? {
        create_exports_table(conn)?;
        success("Created exports table.");
    }

    Ok(())
}
