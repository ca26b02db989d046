// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod raster;
pub mod snapshot;

pub use logic::ExportLogic;
pub use model::SegmentExport;
pub use snapshot::{LogSheet, LogSnapshotExporter, SnapshotOutcome};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One `log_<date>.png` snapshot per daily log
    Png,
    /// Day views (timeline, grid, stops) as JSON
    Json,
    /// Timeline segments as CSV
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
