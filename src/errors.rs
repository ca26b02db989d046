//! Unified application error type.
//! The I/O shells (db, cli, export, planning client) return AppError; the
//! layout calculators never fail and degrade malformed input to defaults.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("No trip plan stored yet: run `rhoslogger plan` first")]
    NoPlan,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid planning payload: {0}")]
    Payload(#[from] serde_json::Error),

    // ---------------------------
    // Trip planning
    // ---------------------------
    #[error("Invalid trip request: {0}")]
    InvalidRequest(String),

    #[error("Planning service error: {0}")]
    Service(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Snapshot capture failed: {0}")]
    Capture(String),
}

pub type AppResult<T> = Result<T, AppError>;
