use crate::core::calculator::grid::{self, ThresholdMode};
use crate::core::calculator::{grouping, stops, timeline};
use crate::models::daily_log::DailyLog;
use crate::models::day_view::DayView;
use crate::models::duty_event::DutyStatusEvent;
use crate::models::plan::PlanResponse;
use crate::models::stop::Stop;
use crate::models::summary::{MapMarker, TripSummary};

pub struct Core;

impl Core {
    /// Build the per-date views of a planning response.
    ///
    /// Dates come from the duty statuses first (delivery order), then from
    /// logs that have no duty status of their own.
    pub fn build_day_views(plan: &PlanResponse, mode: ThresholdMode) -> Vec<DayView> {
        let groups = grouping::group_by_date(plan.duty_statuses());

        let mut dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
        for log in &plan.logs {
            if !dates.contains(&log.date.as_str()) {
                dates.push(log.date.as_str());
            }
        }

        dates
            .into_iter()
            .map(|date| {
                let events = groups
                    .iter()
                    .find(|g| g.date == date)
                    .map(|g| g.events.as_slice());
                Self::build_day_view(date, events, plan.log_for(date), &plan.stops, mode)
            })
            .collect()
    }

    pub fn build_day_view(
        date: &str,
        events: Option<&[DutyStatusEvent]>,
        log: Option<&DailyLog>,
        all_stops: &[Stop],
        mode: ThresholdMode,
    ) -> DayView {
        let relevant = match log {
            Some(l) => stops::stops_for_log(all_stops, l),
            None => stops::stops_for_date(all_stops, date),
        };

        DayView {
            date: date.to_string(),
            timeline: events.map(|evs| timeline::layout_day(date, evs)),
            log: log.cloned(),
            grid: log.map(|l| grid::build_grid(l, mode)),
            markers: stops::spatial_markers(&relevant),
            stops: relevant.into_iter().cloned().collect(),
        }
    }

    pub fn trip_summary(plan: &PlanResponse) -> TripSummary {
        let name = |v: &Option<String>| v.clone().unwrap_or_else(|| "Unknown".to_string());
        let start = name(&plan.trip.current_location);
        let pickup = name(&plan.trip.pickup_location);
        let dropoff = name(&plan.trip.dropoff_location);

        let mut markers = Vec::new();

        if let Some(position) = plan.start_coords {
            markers.push(MapMarker {
                icon: 'S',
                title: format!("Start: {start}"),
                position,
            });
        }

        if let Some(position) = plan.pickup_coords {
            markers.push(MapMarker {
                icon: 'P',
                title: format!("Pickup: {pickup}"),
                position,
            });
        }

        for (i, coords) in plan.stop_coords.iter().enumerate() {
            let Some(position) = *coords else { continue };
            let stop = plan.stops.get(i);
            let kind = stop
                .map(|s| s.kind.as_str())
                .filter(|k| !k.is_empty())
                .unwrap_or("Stop");
            let location = stop
                .map(|s| s.location.as_str())
                .filter(|l| !l.is_empty())
                .unwrap_or("Unknown");

            markers.push(MapMarker {
                icon: 'F',
                title: format!("{kind}: {location}"),
                position,
            });
        }

        if let Some(position) = plan.end_coords {
            markers.push(MapMarker {
                icon: 'D',
                title: format!("Dropoff (End): {dropoff}"),
                position,
            });
        }

        TripSummary {
            start,
            pickup,
            dropoff,
            total_driving: format_hours(plan.total_driving_time),
            total_on_duty: format_hours(plan.total_on_duty_time),
            remaining_cycle: format_hours(plan.remaining_cycle),
            route_points: plan.route_coordinates.len(),
            markers,
        }
    }
}

/// `Some(11.0)` → `"11.00 hours"`, `None` → `"N/A"`
pub fn format_hours(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2} hours"),
        None => "N/A".to_string(),
    }
}
