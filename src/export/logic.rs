// src/export/logic.rs

use crate::core::calculator::grid::ThresholdMode;
use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{absolute_output, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::segments_of;
use crate::export::notify_export_success;
use crate::export::snapshot::{LogSheet, LogSnapshotExporter, SnapshotOutcome};
use crate::models::daily_log::DailyLog;
use crate::models::plan::PlanResponse;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::collections::HashSet;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the current plan.
    ///
    /// - `png`: `target` is a directory receiving one `log_<date>.png` per daily log
    /// - `json` / `csv`: `target` is an absolute output file
    /// - `date`: restrict to one `YYYY-MM-DD` key
    /// - `force`: overwrite files without asking and re-export snapshots already written
    pub fn export(
        pool: &mut DbPool,
        plan: &PlanResponse,
        format: &ExportFormat,
        target: &str,
        date: Option<&str>,
        mode: ThresholdMode,
        force: bool,
    ) -> AppResult<()> {
        match format {
            ExportFormat::Png => Self::export_snapshots(pool, plan, &expand_tilde(target), date, mode, force),
            ExportFormat::Json | ExportFormat::Csv => {
                let path = absolute_output(target)?;
                ensure_writable(&path, force)?;

                let mut views = Core::build_day_views(plan, mode);
                if let Some(d) = date {
                    views.retain(|v| v.date == d);
                }

                if views.is_empty() {
                    warning("No days found for the selected date. Nothing to export.");
                    return Ok(());
                }

                if *format == ExportFormat::Json {
                    export_json(&views, &path)?;
                } else {
                    export_csv(&segments_of(&views), &path)?;
                }

                ttlog_soft(
                    &pool.conn,
                    "export",
                    format.as_str(),
                    &format!("{} day(s) written to {}", views.len(), path.display()),
                );
                Ok(())
            }
        }
    }

    fn export_snapshots(
        pool: &mut DbPool,
        plan: &PlanResponse,
        dir: &Path,
        date: Option<&str>,
        mode: ThresholdMode,
        force: bool,
    ) -> AppResult<()> {
        let logs: Vec<&DailyLog> = plan
            .logs
            .iter()
            .filter(|l| date.is_none_or(|d| l.date == d))
            .collect();

        if logs.is_empty() {
            warning("No daily logs found for the selected date. Nothing to export.");
            return Ok(());
        }

        let known = if force {
            HashSet::new()
        } else {
            queries::load_exported_keys(&pool.conn)?
        };

        let mut exporter = LogSnapshotExporter::new(dir).with_processed(known);

        let sheets: Vec<LogSheet> = logs
            .iter()
            .map(|l| LogSheet::render(l, &plan.stops, mode))
            .collect();
        let items: Vec<(&DailyLog, Option<&LogSheet>)> = logs
            .iter()
            .zip(&sheets)
            .map(|(l, s)| (*l, Some(s)))
            .collect();

        info(format!("Exporting log snapshots to: {}", exporter.out_dir().display()));

        for ((log, _), outcome) in items.iter().zip(exporter.on_render_all(&items)) {
            match outcome {
                SnapshotOutcome::Written(path) => {
                    let file = path.to_string_lossy();
                    queries::mark_exported(&pool.conn, &log.identity(), &log.date, &file)?;
                    ttlog_soft(&pool.conn, "export", "png", &format!("{} → {file}", log.date));
                    notify_export_success("PNG", &path);
                }
                SnapshotOutcome::AlreadyExported => {
                    info(format!("Log {} already exported, skipping.", log.date));
                }
                SnapshotOutcome::Skipped(reason) => {
                    warning(format!("Snapshot for {} skipped: {reason}", log.date));
                }
            }
        }

        Ok(())
    }
}
