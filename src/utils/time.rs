//! Time utilities: parsing HH:MM, minute offsets, midnight wraparound, formatting minutes.

use chrono::{NaiveTime, Timelike};

/// Minutes in one day axis.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// `HH:MM`, or `HH:MM:SS` with the seconds ignored.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Minute offset of an `HH:MM` time of day, in `[0, 1440)`.
///
/// Missing or malformed values are not an error: they count as midnight.
pub fn to_minutes(time: Option<&str>) -> u32 {
    match time.and_then(parse_time) {
        Some(t) => t.hour() * 60 + t.minute(),
        None => {
            tracing::warn!(value = ?time, "invalid time value, counting it as 00:00");
            0
        }
    }
}

/// Normalize a pair of minute offsets so that `end >= start`.
/// An end earlier than the start crosses midnight and is pushed to the next day.
pub fn normalize_minutes(start: u32, end: u32) -> (u32, u32) {
    if end < start {
        (start, end + MINUTES_PER_DAY)
    } else {
        (start, end)
    }
}

pub fn normalize_interval(start: Option<&str>, end: Option<&str>) -> (u32, u32) {
    normalize_minutes(to_minutes(start), to_minutes(end))
}

/// `125` → `"2h 5m"`
pub fn format_duration(mins: u32) -> String {
    format!("{}h {}m", mins / 60, mins % 60)
}
