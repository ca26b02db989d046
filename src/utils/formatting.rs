//! Terminal renderers for timelines, log grids and remarks.

use crate::core::calculator::grid::{GridStatus, LogGrid};
use crate::core::calculator::timeline::{AXIS_LABELS, Remark, TimelineSegment};
use crate::models::duty_status::{DutyStatus, SegmentStyle};
use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

/// Characters of one day track (30 minutes per character).
pub const TRACK_WIDTH: usize = 48;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

pub fn dimmed(s: &str) -> String {
    Colour::Fixed(244).paint(s).to_string()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// First character and character count of a segment on a `width`-wide track.
///
/// Follows the percentages of the layout, so the minimum display width is
/// kept; the span is clipped at the end of the track.
pub fn track_span(segment: &TimelineSegment, width: usize) -> (usize, usize) {
    let scale = width as f64 / 100.0;
    let start = ((segment.left_offset_percent * scale).floor() as usize).min(width - 1);
    let len = ((segment.width_percent * scale).round() as usize).max(1);
    (start, len.min(width - start))
}

/// Axis line: `Midnight`, `6:00`, `Noon`, `18:00`, `24:00` at their quarters.
pub fn axis_line(width: usize) -> String {
    let mut line = vec![' '; width + 6];
    for (i, label) in AXIS_LABELS.iter().enumerate() {
        let at = (i * width / 4).min(line.len().saturating_sub(label.len()));
        for (k, ch) in label.chars().enumerate() {
            if let Some(slot) = line.get_mut(at + k) {
                *slot = ch;
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

/// One timeline row: dotted track with the segment painted in its style colour.
pub fn render_track(segment: &TimelineSegment, width: usize) -> String {
    let (start, len) = track_span(segment, width);
    let before = "·".repeat(start);
    let bar = segment.style.colour().paint("█".repeat(len)).to_string();
    let after = "·".repeat(width - start - len);
    format!("{}{bar}{}", dimmed(&before), dimmed(&after))
}

/// Two-character cell per hour, coloured by grid status.
pub fn render_grid_row(grid: &LogGrid) -> String {
    grid.iter()
        .map(|slot| slot.status.colour().paint("██").to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hour numbers aligned with [`render_grid_row`].
pub fn grid_hours_line() -> String {
    (0..24)
        .map(|h| format!("{h:>2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn grid_legend() -> String {
    GridStatus::ALL
        .iter()
        .map(|s| format!("{} {}", s.colour().paint("██"), s.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn timeline_legend() -> String {
    DutyStatus::ALL
        .iter()
        .map(|s| {
            let swatch = SegmentStyle::for_status(Some(*s)).colour().paint("██");
            format!("{swatch} {}", s.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Remarks as `HH:MM: text`, wrapped at `width` with a hanging indent.
pub fn format_remarks(remarks: &[Remark], width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for r in remarks {
        let first = format!("{}: ", r.time);
        let indent = " ".repeat(first.width());
        let opts = textwrap::Options::new(width)
            .initial_indent(&first)
            .subsequent_indent(&indent);
        out.extend(textwrap::wrap(&r.text, opts).into_iter().map(|l| l.into_owned()));
    }
    out
}
