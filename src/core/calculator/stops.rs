//! Binding route stops to a single day.

use crate::models::daily_log::DailyLog;
use crate::models::stop::{Coordinates, Stop};
use serde::Serialize;

/// A stop that can be pinned on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopMarker {
    pub index: usize,
    pub kind: String,
    pub coordinates: Coordinates,
    pub duration: f64,
}

fn is_on_date(stop: &Stop, date: &str) -> bool {
    !date.is_empty() && stop.time.as_deref().is_some_and(|t| t.starts_with(date))
}

fn same_place(a: &Stop, b: &Stop) -> bool {
    a.kind == b.kind && a.location == b.location
}

/// Stops whose timestamp falls on `date`.
pub fn stops_for_date<'a>(stops: &'a [Stop], date: &str) -> Vec<&'a Stop> {
    stops.iter().filter(|s| is_on_date(s, date)).collect()
}

/// Stops whose `(type, location)` already appears among the day's entries.
pub fn stops_matching_entries<'a>(stops: &'a [Stop], entries: &[Stop]) -> Vec<&'a Stop> {
    stops
        .iter()
        .filter(|s| entries.iter().any(|e| same_place(s, e)))
        .collect()
}

/// Stops relevant to `log`: on its date, or listed in the log itself.
pub fn stops_for_log<'a>(stops: &'a [Stop], log: &DailyLog) -> Vec<&'a Stop> {
    stops
        .iter()
        .filter(|s| is_on_date(s, &log.date) || log.stops.iter().any(|e| same_place(s, e)))
        .collect()
}

/// Map markers for stops with a resolved position. `TBD` never gets one.
pub fn spatial_markers(stops: &[&Stop]) -> Vec<StopMarker> {
    stops
        .iter()
        .enumerate()
        .filter_map(|(index, stop)| {
            stop.coordinates().map(|coordinates| StopMarker {
                index,
                kind: stop.kind.clone(),
                coordinates,
                duration: stop.duration,
            })
        })
        .collect()
}

/// Text lines for a stop list; unresolved stops included.
pub fn describe_all(stops: &[&Stop]) -> Vec<String> {
    stops.iter().map(|s| s.describe()).collect()
}
