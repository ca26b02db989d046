// src/export/model.rs

use crate::models::day_view::DayView;
use serde::Serialize;

/// Flat row of one laid-out timeline segment, for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct SegmentExport {
    pub date: String,
    pub row: usize,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
    pub duration: String,
    pub left_percent: f64,
    pub width_percent: f64,
}

pub(crate) fn segments_of(views: &[DayView]) -> Vec<SegmentExport> {
    views
        .iter()
        .filter_map(|v| v.timeline.as_ref())
        .flat_map(|t| {
            t.segments.iter().map(move |s| SegmentExport {
                date: t.date.clone(),
                row: s.row_index,
                status: s.status.clone(),
                start_time: s.start_time.clone(),
                end_time: s.end_time.clone(),
                duration_minutes: s.duration_minutes,
                duration: s.duration_label(),
                left_percent: round2(s.left_offset_percent),
                width_percent: round2(s.width_percent),
            })
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
