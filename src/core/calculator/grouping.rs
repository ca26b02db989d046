use crate::models::duty_event::DutyStatusEvent;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: String,
    pub events: Vec<DutyStatusEvent>,
}

/// Bucket duty statuses by date key.
/// Dates keep first-seen order; events keep delivery order within a date.
pub fn group_by_date(events: &[DutyStatusEvent]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for ev in events {
        let slot = *index.entry(ev.date.as_str()).or_insert_with(|| {
            groups.push(DayGroup {
                date: ev.date.clone(),
                events: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].events.push(ev.clone());
    }

    groups
}
