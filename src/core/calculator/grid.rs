//! 24-slot daily log grid built from aggregate hour totals.
//!
//! The grid front-loads categories in a fixed order and says nothing about
//! when things actually happened; the timeline layout does that.

use crate::models::daily_log::DailyLog;
use ansi_term::Colour;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const SLOTS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GridStatus {
    Driving,
    OnDuty,
    OffDuty,
    Sleeper,
}

impl GridStatus {
    pub const ALL: [GridStatus; 4] = [
        GridStatus::Driving,
        GridStatus::OnDuty,
        GridStatus::OffDuty,
        GridStatus::Sleeper,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GridStatus::Driving => "driving",
            GridStatus::OnDuty => "on-duty",
            GridStatus::OffDuty => "off-duty",
            GridStatus::Sleeper => "sleeper",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            GridStatus::Driving => [239, 68, 68],
            GridStatus::OnDuty => [234, 179, 8],
            GridStatus::OffDuty => [34, 197, 94],
            GridStatus::Sleeper => [59, 130, 246],
        }
    }

    pub fn colour(&self) -> Colour {
        let [r, g, b] = self.rgb();
        Colour::RGB(r, g, b)
    }
}

/// How the on-duty and off-duty boundaries are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMode {
    /// On-duty ends at `onDutyHours` as an absolute hour index,
    /// off-duty at `onDutyHours + offDutyHours`.
    #[default]
    Verbatim,
    /// Boundaries are running sums: driving, +on-duty, +off-duty.
    Cumulative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogGridSlot {
    pub hour: u8,
    pub status: GridStatus,
}

impl LogGridSlot {
    /// `"7:00"`
    pub fn hour_label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

pub type LogGrid = [LogGridSlot; SLOTS_PER_DAY];

/// Upper bounds (exclusive, in hours) of the driving, on-duty and off-duty runs.
pub fn thresholds(log: &DailyLog, mode: ThresholdMode) -> (f64, f64, f64) {
    let driving = log.driving_hours;
    match mode {
        ThresholdMode::Verbatim => (
            driving,
            log.on_duty_hours,
            log.on_duty_hours + log.off_duty_hours,
        ),
        ThresholdMode::Cumulative => {
            let on_duty = driving + log.on_duty_hours;
            (driving, on_duty, on_duty + log.off_duty_hours)
        }
    }
}

pub fn build_grid(log: &DailyLog, mode: ThresholdMode) -> LogGrid {
    let (driving_end, on_duty_end, off_duty_end) = thresholds(log, mode);

    std::array::from_fn(|hour| {
        let h = hour as f64;
        let status = if h < driving_end {
            GridStatus::Driving
        } else if h < on_duty_end {
            GridStatus::OnDuty
        } else if h < off_duty_end {
            GridStatus::OffDuty
        } else {
            GridStatus::Sleeper
        };

        LogGridSlot {
            hour: hour as u8,
            status,
        }
    })
}

/// Number of slots carrying `status`.
pub fn count(grid: &LogGrid, status: GridStatus) -> usize {
    grid.iter().filter(|s| s.status == status).count()
}
