//! Database row models.
//! These are thin wrappers around SQLite rows.

/// A planning response as stored in `plans`.
#[derive(Debug, Clone)]
pub struct StoredPlan {
    pub id: i64,
    pub created_at: String,
    pub source: String, // "service" | "file"
    pub payload: String,
}

/// A row of the `exports` processed-set.
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub log_key: String,
    pub date: String,
    pub file: String,
    pub created_at: String,
}
