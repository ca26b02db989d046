use rhoslogger::core::calculator::stops::{
    describe_all, spatial_markers, stops_for_date, stops_for_log, stops_matching_entries,
};
use rhoslogger::models::daily_log::DailyLog;
use rhoslogger::models::stop::Stop;

fn route() -> Vec<Stop> {
    vec![
        Stop::new("fuel", "-87.6, 41.8", 0.5, Some("2025-03-01T09:00:00Z")),
        Stop::new("rest", "-86.1, 39.7", 10.0, None),
        Stop::new("fuel", "TBD", 0.5, Some("2025-03-02T10:00:00Z")),
    ]
}

#[test]
fn test_stops_for_date_uses_timestamp_prefix() {
    let stops = route();
    let day1 = stops_for_date(&stops, "2025-03-01");
    assert_eq!(day1.len(), 1);
    assert_eq!(day1[0].location, "-87.6, 41.8");

    assert!(stops_for_date(&stops, "2025-03-03").is_empty());
    assert!(stops_for_date(&stops, "").is_empty());
}

#[test]
fn test_stops_matching_entries_by_type_and_location() {
    let stops = route();
    let entries = vec![Stop::new("rest", "-86.1, 39.7", 0.0, None)];
    let matched = stops_matching_entries(&stops, &entries);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].kind, "rest");

    let other = vec![Stop::new("fuel", "-86.1, 39.7", 0.0, None)];
    assert!(stops_matching_entries(&stops, &other).is_empty());
}

#[test]
fn test_stops_for_log_unions_date_and_entries() {
    let stops = route();
    let mut log = DailyLog::new("2025-03-01", 8.0, 10.0, 4.0);
    log.stops.push(Stop::new("rest", "-86.1, 39.7", 10.0, None));

    let relevant = stops_for_log(&stops, &log);
    assert_eq!(relevant.len(), 2);
    assert_eq!(relevant[0].kind, "fuel");
    assert_eq!(relevant[1].kind, "rest");
}

#[test]
fn test_tbd_stop_is_listed_but_never_pinned() {
    let stops = route();
    let day2 = stops_for_date(&stops, "2025-03-02");
    assert_eq!(day2.len(), 1);
    assert!(day2[0].is_tbd());

    assert!(spatial_markers(&day2).is_empty());
    assert_eq!(describe_all(&day2), vec!["Fuel at TBD (0.5 hours)".to_string()]);
}

#[test]
fn test_markers_carry_parsed_coordinates() {
    let stops = route();
    let all: Vec<&Stop> = stops.iter().collect();
    let markers = spatial_markers(&all);

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].index, 0);
    assert_eq!(markers[0].coordinates.lng, -87.6);
    assert_eq!(markers[0].coordinates.lat, 41.8);
    assert_eq!(markers[1].index, 1);
    assert_eq!(markers[1].duration, 10.0);
}

#[test]
fn test_unparsable_locations_have_no_coordinates() {
    assert!(Stop::new("fuel", "Springfield, IL", 0.5, None).coordinates().is_none());
    assert!(Stop::new("fuel", "200.0, 10.0", 0.5, None).coordinates().is_none());
    assert!(Stop::new("fuel", "tbd", 0.5, None).is_tbd());
}

#[test]
fn test_stop_title_defaults() {
    assert_eq!(Stop::new("", "x", 0.0, None).title(), "Stop");
    assert_eq!(Stop::new("pickup", "x", 1.0, None).title(), "Pickup");
}
