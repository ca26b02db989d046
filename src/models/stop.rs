use super::lenient;
use serde::{Deserialize, Serialize};

/// Location placeholder for a stop the service has not resolved yet.
pub const TBD: &str = "TBD";

/// A planned stop (fuel, rest, pickup, dropoff ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::hours")]
    pub duration: f64, // hours
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub time: Option<String>, // ISO timestamp
}

/// Map position parsed from a `"lng, lat"` location string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Stop {
    pub fn new(kind: &str, location: &str, duration: f64, time: Option<&str>) -> Self {
        Self {
            kind: kind.to_string(),
            location: location.to_string(),
            duration,
            time: time.map(str::to_string),
        }
    }

    pub fn is_tbd(&self) -> bool {
        self.location.trim().eq_ignore_ascii_case(TBD)
    }

    /// `None` for `TBD` and for anything that is not a `"lng, lat"` pair.
    pub fn coordinates(&self) -> Option<Coordinates> {
        if self.is_tbd() {
            return None;
        }

        let (lng, lat) = self.location.split_once(',')?;
        let lng: f64 = lng.trim().parse().ok()?;
        let lat: f64 = lat.trim().parse().ok()?;

        if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
            return None;
        }

        Some(Coordinates { lng, lat })
    }

    /// `"fuel"` → `"Fuel"`
    pub fn title(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Stop".to_string(),
        }
    }

    /// `"Fuel at -87.6, 41.8 (0.5 hours)"`
    pub fn describe(&self) -> String {
        format!("{} at {} ({} hours)", self.title(), self.location, self.duration)
    }
}
