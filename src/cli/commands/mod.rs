pub mod config;
pub mod export;
pub mod grid;
pub mod init;
pub mod log;
pub mod plan;
pub mod stops;
pub mod summary;
pub mod timeline;

use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Validate an optional `--date` argument.
pub(crate) fn date_filter(date: &Option<String>) -> AppResult<Option<&str>> {
    match date.as_deref() {
        Some(d) if date::parse_date(d).is_none() => Err(AppError::InvalidDate(d.to_string())),
        other => Ok(other.map(str::trim)),
    }
}
