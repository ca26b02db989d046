use ansi_term::Colour;
use serde::Serialize;

/// The four HOS duty statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// Legend order.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Label used by the planning service.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }

    /// Accepts the service labels and their common spellings
    /// (`"Off Duty"`, `"off_duty"`, `"OFF-DUTY"`, `"sleeper"`, `"on duty"` ...).
    pub fn from_label(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "offduty" | "off" => Some(DutyStatus::OffDuty),
            "sleeperberth" | "sleeper" | "sb" => Some(DutyStatus::SleeperBerth),
            "driving" | "drive" => Some(DutyStatus::Driving),
            "ondutynotdriving" | "onduty" | "on" => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }
}

/// Visual category of a timeline segment.
/// Unrecognized statuses land in `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentStyle {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
    Neutral,
}

impl SegmentStyle {
    pub fn for_status(status: Option<DutyStatus>) -> Self {
        match status {
            Some(DutyStatus::OffDuty) => SegmentStyle::OffDuty,
            Some(DutyStatus::SleeperBerth) => SegmentStyle::Sleeper,
            Some(DutyStatus::Driving) => SegmentStyle::Driving,
            Some(DutyStatus::OnDutyNotDriving) => SegmentStyle::OnDuty,
            None => SegmentStyle::Neutral,
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            SegmentStyle::OffDuty => [191, 219, 254],
            SegmentStyle::Sleeper => [187, 247, 208],
            SegmentStyle::Driving => [254, 202, 202],
            SegmentStyle::OnDuty => [254, 240, 138],
            SegmentStyle::Neutral => [229, 231, 235],
        }
    }

    pub fn colour(&self) -> Colour {
        let [r, g, b] = self.rgb();
        Colour::RGB(r, g, b)
    }
}
