use super::lenient;
use super::stop::Stop;
use serde::{Deserialize, Serialize};

/// Aggregate hour totals for one date.
///
/// Built once per planning response and never mutated; a newer response
/// replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, alias = "driving_hours", deserialize_with = "lenient::hours")]
    pub driving_hours: f64,
    #[serde(default, alias = "on_duty_hours", deserialize_with = "lenient::hours")]
    pub on_duty_hours: f64,
    #[serde(default, alias = "off_duty_hours", deserialize_with = "lenient::hours")]
    pub off_duty_hours: f64,
    /// Stops the service attached to this log, if any.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub stops: Vec<Stop>,
}

impl DailyLog {
    pub fn new(date: &str, driving: f64, on_duty: f64, off_duty: f64) -> Self {
        Self {
            date: date.to_string(),
            driving_hours: driving,
            on_duty_hours: on_duty,
            off_duty_hours: off_duty,
            stops: Vec::new(),
        }
    }

    /// Whatever the three explicit totals leave of the 24 hours.
    pub fn sleeper_hours(&self) -> f64 {
        let accounted = self.driving_hours + self.on_duty_hours + self.off_duty_hours;
        (24.0 - accounted).max(0.0)
    }

    /// Identity of this log value: any change to the log yields a new key.
    pub fn identity(&self) -> String {
        let content = serde_json::to_string(self).unwrap_or_default();
        format!("{}#{}", self.date, content)
    }

    /// `log_2025-03-01.png`
    pub fn snapshot_file_name(&self) -> String {
        format!("log_{}.png", self.date)
    }
}
