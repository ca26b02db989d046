use super::daily_log::DailyLog;
use super::stop::Stop;
use crate::core::calculator::grid::LogGrid;
use crate::core::calculator::stops::StopMarker;
use crate::core::calculator::timeline::TimelineLayout;
use serde::Serialize;

/// Everything shown for one date: the interval timeline, the aggregate grid
/// and the stops bound to the day. Either view may be missing when the
/// planning response has no data for it.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub date: String,
    pub timeline: Option<TimelineLayout>,
    pub log: Option<DailyLog>,
    pub grid: Option<LogGrid>,
    pub stops: Vec<Stop>,
    pub markers: Vec<StopMarker>,
}
