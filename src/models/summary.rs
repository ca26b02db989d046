use serde::Serialize;

/// A pin on the route map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub icon: char, // S, P, F, D
    pub title: String,
    pub position: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub start: String,
    pub pickup: String,
    pub dropoff: String,
    pub total_driving: String,
    pub total_on_duty: String,
    pub remaining_cycle: String,
    pub route_points: usize,
    pub markers: Vec<MapMarker>,
}
