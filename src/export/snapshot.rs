// src/export/snapshot.rs

use crate::core::calculator::grid::{self, LogGrid, ThresholdMode};
use crate::core::calculator::stops;
use crate::errors::{AppError, AppResult};
use crate::export::raster::Canvas;
use crate::models::daily_log::DailyLog;
use crate::models::stop::Stop;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

const SHEET_W: u32 = 960;
const PAD: u32 = 24;
const COLS: u32 = 12;
const GAP: u32 = 4;
const CELL_H: u32 = 32;
const LINE_H: u32 = 22;

const WHITE: [u8; 3] = [255, 255, 255];
const BORDER: [u8; 3] = [209, 213, 219];
const TITLE: [u8; 3] = [31, 41, 55];
const TEXT: [u8; 3] = [75, 85, 99];

/// The printable log sheet of one day, ready to be captured.
#[derive(Debug, Clone)]
pub struct LogSheet {
    pub date: String,
    pub grid: LogGrid,
    pub stop_lines: Vec<String>,
}

impl LogSheet {
    pub fn render(log: &DailyLog, all_stops: &[Stop], mode: ThresholdMode) -> Self {
        let relevant = stops::stops_for_log(all_stops, log);
        Self {
            date: log.date.clone(),
            grid: grid::build_grid(log, mode),
            stop_lines: stops::describe_all(&relevant),
        }
    }

    fn grid_top() -> u32 {
        PAD + Canvas::glyph_height(3) + PAD
    }

    fn stops_top() -> u32 {
        Self::grid_top() + 2 * (CELL_H + GAP) + PAD
    }

    fn height(&self) -> u32 {
        Self::stops_top() + LINE_H * (1 + self.stop_lines.len() as u32) + PAD
    }

    /// Rasterize the sheet: title, 24 hour cells on two rows, stop list.
    pub fn paint(&self) -> Canvas {
        let mut canvas = Canvas::new(SHEET_W, self.height(), WHITE);
        canvas.stroke_rect(0, 0, SHEET_W, self.height(), BORDER);

        canvas.draw_text(PAD, PAD, &format!("Date: {}", self.date), 3, TITLE);

        let cell_w = (SHEET_W - 2 * PAD - (COLS - 1) * GAP) / COLS;
        let top = Self::grid_top();

        for slot in &self.grid {
            let col = slot.hour as u32 % COLS;
            let row = slot.hour as u32 / COLS;
            let x = PAD + col * (cell_w + GAP);
            let y = top + row * (CELL_H + GAP);

            canvas.fill_rect(x, y, cell_w, CELL_H, slot.status.rgb());
            canvas.draw_text_centered(x, y, cell_w, CELL_H, &slot.hour_label(), 2, WHITE);
        }

        let mut y = Self::stops_top();
        canvas.draw_text(PAD, y, "Stops:", 2, TEXT);
        for line in &self.stop_lines {
            y += LINE_H;
            canvas.draw_text(PAD + 16, y, line, 2, TEXT);
        }

        canvas
    }

    /// Capture the sheet as PNG bytes. Each call owns its own pixel buffer.
    pub fn capture(&self) -> AppResult<Vec<u8>> {
        self.paint().encode_png()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotOutcome {
    Written(PathBuf),
    /// This exact log value was exported before.
    AlreadyExported,
    /// Capture or emission failed; nothing was written and the log stays pending.
    Skipped(String),
}

/// Emits `log_<date>.png` once per distinct log value.
///
/// The processed set is keyed by [`DailyLog::identity`]: rendering the same
/// log again is a no-op, while a changed log is exported again.
pub struct LogSnapshotExporter {
    out_dir: PathBuf,
    processed: HashSet<String>,
}

impl LogSnapshotExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            processed: HashSet::new(),
        }
    }

    /// Seed identities already exported in earlier runs.
    pub fn with_processed(mut self, keys: impl IntoIterator<Item = String>) -> Self {
        self.processed.extend(keys);
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn is_processed(&self, log: &DailyLog) -> bool {
        self.processed.contains(&log.identity())
    }

    /// Called each time `log` is rendered. `sheet` is `None` while the
    /// view is not available for capture.
    pub fn on_render(&mut self, log: &DailyLog, sheet: Option<&LogSheet>) -> SnapshotOutcome {
        if self.is_processed(log) {
            return SnapshotOutcome::AlreadyExported;
        }

        let captured = match sheet {
            Some(sheet) => sheet.capture(),
            None => Err(AppError::Capture("log sheet is not rendered".into())),
        };

        self.finish(log, captured)
    }

    /// Same as [`on_render`](Self::on_render) for a batch. Captures run on
    /// scoped threads and complete independently; files are written and the
    /// processed set updated afterwards on this thread.
    ///
    /// A log listed more than once is captured once, from its first copy
    /// with a rendered sheet; the other copies report that capture's result.
    pub fn on_render_all(&mut self, items: &[(&DailyLog, Option<&LogSheet>)]) -> Vec<SnapshotOutcome> {
        let keys: Vec<String> = items.iter().map(|(log, _)| log.identity()).collect();

        let mut chosen: HashMap<&str, usize> = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            if self.processed.contains(key) {
                continue;
            }
            match chosen.get(key.as_str()) {
                Some(&j) if items[j].1.is_some() || items[i].1.is_none() => {}
                _ => {
                    chosen.insert(key.as_str(), i);
                }
            }
        }

        let captures: Vec<Option<AppResult<Vec<u8>>>> = thread::scope(|s| {
            let handles: Vec<_> = items
                .iter()
                .enumerate()
                .map(|(i, (_, sheet))| {
                    let sheet = *sheet;
                    let todo = chosen.get(keys[i].as_str()) == Some(&i);
                    todo.then(|| s.spawn(move || sheet.map(LogSheet::capture)))
                })
                .collect();

            handles
                .into_iter()
                .map(|h| {
                    h.map(|h| match h.join() {
                        Ok(Some(result)) => result,
                        Ok(None) => Err(AppError::Capture("log sheet is not rendered".into())),
                        Err(_) => Err(AppError::Capture("capture worker panicked".into())),
                    })
                })
                .collect()
        });

        let outcomes: Vec<Option<SnapshotOutcome>> = items
            .iter()
            .zip(captures)
            .map(|((log, _), captured)| captured.map(|result| self.finish(log, result)))
            .collect();

        (0..items.len())
            .map(|i| match &outcomes[i] {
                Some(outcome) => outcome.clone(),
                None => match chosen.get(keys[i].as_str()).and_then(|&j| outcomes[j].as_ref()) {
                    Some(SnapshotOutcome::Skipped(reason)) => SnapshotOutcome::Skipped(reason.clone()),
                    _ => SnapshotOutcome::AlreadyExported,
                },
            })
            .collect()
    }

    fn finish(&mut self, log: &DailyLog, captured: AppResult<Vec<u8>>) -> SnapshotOutcome {
        match captured.and_then(|png| self.emit(log, &png)) {
            Ok(path) => {
                self.processed.insert(log.identity());
                SnapshotOutcome::Written(path)
            }
            Err(e) => {
                tracing::warn!(date = %log.date, error = %e, "log snapshot skipped");
                SnapshotOutcome::Skipped(e.to_string())
            }
        }
    }

    fn emit(&self, log: &DailyLog, png: &[u8]) -> AppResult<PathBuf> {
        if log.date.trim().is_empty() {
            return Err(AppError::Export("log has no date".into()));
        }

        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(log.snapshot_file_name());
        fs::write(&path, png)?;
        Ok(path)
    }
}
