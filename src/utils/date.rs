use chrono::{Local, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Local timestamp in ISO 8601, used for stored rows.
pub fn now_iso() -> String {
    Local::now().to_rfc3339()
}
