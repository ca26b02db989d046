use crate::models::duty_event::DutyStatusEvent;
use crate::models::duty_status::SegmentStyle;
use crate::utils::time::{self, MINUTES_PER_DAY};
use serde::Serialize;

/// Narrowest segment drawn on the day axis, in percent.
/// Display only: durations always come from the real interval.
pub const MIN_WIDTH_PERCENT: f64 = 5.0;

pub const ROW_HEIGHT_PX: u32 = 40; // block + margin
pub const BLOCK_HEIGHT_PX: u32 = 32;
pub const HEADER_HEIGHT_PX: u32 = 48;
pub const MIN_CONTAINER_HEIGHT_PX: u32 = 256;
const CONTAINER_PADDING_PX: u32 = 40;

pub const AXIS_LABELS: [&str; 5] = ["Midnight", "6:00", "Noon", "18:00", "24:00"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSegment {
    pub row_index: usize,
    pub status: String,
    pub style: SegmentStyle,
    pub start_time: String,
    pub end_time: String,
    pub start_minutes: u32,
    pub end_minutes: u32, // may exceed 1440 after wraparound
    pub duration_minutes: u32,
    pub left_offset_percent: f64,
    pub width_percent: f64,
}

impl TimelineSegment {
    /// `"2h 30m"`
    pub fn duration_label(&self) -> String {
        time::format_duration(self.duration_minutes)
    }

    /// `"Driving (08:00 - 10:30)"`
    pub fn label(&self) -> String {
        format!("{} ({} - {})", self.status, self.start_time, self.end_time)
    }

    pub fn top_px(&self) -> u32 {
        self.row_index as u32 * ROW_HEIGHT_PX
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Remark {
    pub time: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub date: String,
    pub segments: Vec<TimelineSegment>,
    pub remarks: Vec<Remark>,
    /// Rows reserved on the axis: one per input event, drawn or not.
    pub rows: usize,
    pub skipped: usize,
}

impl TimelineLayout {
    pub fn container_height_px(&self) -> u32 {
        let needed = self.rows as u32 * ROW_HEIGHT_PX + HEADER_HEIGHT_PX + CONTAINER_PADDING_PX;
        needed.max(MIN_CONTAINER_HEIGHT_PX)
    }

    pub fn total_minutes(&self) -> u32 {
        self.segments.iter().map(|s| s.duration_minutes).sum()
    }

    /// Left offset of each hour tick on the axis, in percent.
    pub fn hour_ticks() -> [f64; 24] {
        std::array::from_fn(|hour| hour as f64 / 24.0 * 100.0)
    }
}

/// Lay out one event at `row`. `None` when it lacks a start or end time.
pub fn layout_segment(row: usize, event: &DutyStatusEvent) -> Option<TimelineSegment> {
    let (Some(start), Some(end)) = (event.start_time.as_deref(), event.end_time.as_deref()) else {
        return None;
    };

    let (start_min, end_min) = time::normalize_interval(Some(start), Some(end));
    let duration = end_min - start_min;
    let day = MINUTES_PER_DAY as f64;

    Some(TimelineSegment {
        row_index: row,
        status: event.status.clone(),
        style: SegmentStyle::for_status(event.duty_status()),
        start_time: start.to_string(),
        end_time: end.to_string(),
        start_minutes: start_min,
        end_minutes: end_min,
        duration_minutes: duration,
        left_offset_percent: start_min as f64 / day * 100.0,
        width_percent: (duration as f64 / day * 100.0).max(MIN_WIDTH_PERCENT),
    })
}

/// Lay out one day's events in delivery order.
///
/// Rows follow input position (naive stacking): overlapping intervals are
/// not detected, and an event that cannot be drawn leaves its row empty.
pub fn layout_day(date: &str, events: &[DutyStatusEvent]) -> TimelineLayout {
    let mut segments = Vec::with_capacity(events.len());
    let mut remarks = Vec::new();
    let mut skipped = 0;

    for (row, event) in events.iter().enumerate() {
        match layout_segment(row, event) {
            Some(segment) => segments.push(segment),
            None => {
                skipped += 1;
                tracing::warn!(date, row, status = %event.status, "duty status without start/end time skipped");
            }
        }

        if let (Some(text), Some(start)) = (&event.remarks, &event.start_time) {
            remarks.push(Remark {
                time: start.clone(),
                text: text.clone(),
            });
        }
    }

    TimelineLayout {
        date: date.to_string(),
        segments,
        remarks,
        rows: events.len(),
        skipped,
    }
}
