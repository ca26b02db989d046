use super::duty_status::DutyStatus;
use super::lenient;
use serde::{Deserialize, Serialize};

/// One duty-status interval as delivered by the planning service.
///
/// Times are kept as received (`HH:MM`); an end earlier than the start
/// means the interval crosses midnight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyStatusEvent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String, // "YYYY-MM-DD"
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, alias = "start_time", deserialize_with = "lenient::opt_string")]
    pub start_time: Option<String>,
    #[serde(default, alias = "end_time", deserialize_with = "lenient::opt_string")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub remarks: Option<String>,
}

impl DutyStatusEvent {
    pub fn new(date: &str, status: &str, start: &str, end: &str) -> Self {
        Self {
            date: date.to_string(),
            status: status.to_string(),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            remarks: None,
        }
    }

    pub fn with_remarks(mut self, remarks: &str) -> Self {
        self.remarks = Some(remarks.to_string());
        self
    }

    pub fn duty_status(&self) -> Option<DutyStatus> {
        DutyStatus::from_label(&self.status)
    }
}
