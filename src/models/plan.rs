use super::daily_log::DailyLog;
use super::duty_event::DutyStatusEvent;
use super::lenient;
use super::stop::Stop;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Upper bound of the 70-hour / 8-day cycle accepted by the planner.
pub const MAX_CYCLE_HOURS: f64 = 70.0;

/// Body POSTed to the planning service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_used: f64,
}

impl TripRequest {
    /// Validate the trip form: every field filled, cycle hours within `[0, 70]`.
    pub fn new(
        current: &str,
        pickup: &str,
        dropoff: &str,
        cycle_used: Option<f64>,
    ) -> AppResult<Self> {
        let fields = [
            ("current location", current),
            ("pickup location", pickup),
            ("dropoff location", dropoff),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::InvalidRequest(format!("{name} is required")));
            }
        }

        let cycle_used = cycle_used
            .ok_or_else(|| AppError::InvalidRequest("current cycle used is required".into()))?;

        if !(0.0..=MAX_CYCLE_HOURS).contains(&cycle_used) {
            return Err(AppError::InvalidRequest(format!(
                "current cycle used must be between 0 and {MAX_CYCLE_HOURS} hours, got {cycle_used}"
            )));
        }

        Ok(Self {
            current_location: current.trim().to_string(),
            pickup_location: pickup.trim().to_string(),
            dropoff_location: dropoff.trim().to_string(),
            cycle_used,
        })
    }
}

/// Trip echo returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInfo {
    #[serde(default, alias = "current_location", deserialize_with = "lenient::opt_string")]
    pub current_location: Option<String>,
    #[serde(default, alias = "pickup_location", deserialize_with = "lenient::opt_string")]
    pub pickup_location: Option<String>,
    #[serde(default, alias = "dropoff_location", deserialize_with = "lenient::opt_string")]
    pub dropoff_location: Option<String>,
    #[serde(default, alias = "duty_statuses", deserialize_with = "lenient::null_as_default")]
    pub duty_statuses: Vec<DutyStatusEvent>,
}

/// Planning service response. Every collection may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub trip: TripInfo,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub stops: Vec<Stop>,
    #[serde(default, alias = "duty_statuses", deserialize_with = "lenient::null_as_default")]
    pub duty_statuses: Vec<DutyStatusEvent>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub logs: Vec<DailyLog>,

    #[serde(default, alias = "route_coordinates", deserialize_with = "lenient::points")]
    pub route_coordinates: Vec<[f64; 2]>,
    #[serde(default, alias = "start_coords", deserialize_with = "lenient::opt_point")]
    pub start_coords: Option<[f64; 2]>,
    #[serde(default, alias = "pickup_coords", deserialize_with = "lenient::opt_point")]
    pub pickup_coords: Option<[f64; 2]>,
    #[serde(default, alias = "stop_coords", deserialize_with = "lenient::point_slots")]
    pub stop_coords: Vec<Option<[f64; 2]>>,
    #[serde(default, alias = "end_coords", deserialize_with = "lenient::opt_point")]
    pub end_coords: Option<[f64; 2]>,

    #[serde(default, alias = "total_driving_time", deserialize_with = "lenient::opt_hours")]
    pub total_driving_time: Option<f64>,
    #[serde(default, alias = "total_on_duty_time", deserialize_with = "lenient::opt_hours")]
    pub total_on_duty_time: Option<f64>,
    #[serde(default, alias = "remaining_cycle", deserialize_with = "lenient::opt_hours")]
    pub remaining_cycle: Option<f64>,
}

impl PlanResponse {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Duty statuses sit at the top level or under `trip`, depending on the backend.
    pub fn duty_statuses(&self) -> &[DutyStatusEvent] {
        if self.duty_statuses.is_empty() {
            &self.trip.duty_statuses
        } else {
            &self.duty_statuses
        }
    }

    pub fn log_for(&self, date: &str) -> Option<&DailyLog> {
        self.logs.iter().find(|l| l.date == date)
    }
}
