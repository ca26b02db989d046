mod common;
use common::PLAN_JSON;
use rhoslogger::core::calculator::grid::ThresholdMode;
use rhoslogger::core::logic::{Core, format_hours};
use rhoslogger::core::plan::service_error_message;
use rhoslogger::errors::AppError;
use rhoslogger::models::plan::{PlanResponse, TripRequest};

fn fixture() -> PlanResponse {
    PlanResponse::from_json(PLAN_JSON).expect("fixture parses")
}

#[test]
fn test_payload_accepts_snake_case_and_numeric_strings() {
    let plan = fixture();
    assert_eq!(plan.duty_statuses().len(), 6);
    assert_eq!(plan.logs[1].driving_hours, 4.0);
    assert_eq!(plan.logs[0].on_duty_hours, 7.0);
    assert_eq!(plan.stop_coords.len(), 3);
    assert!(plan.stop_coords[1].is_none());
}

#[test]
fn test_payload_tolerates_nulls_and_missing_fields() {
    let plan = PlanResponse::from_json(
        r#"{ "logs": null, "stops": [ { "type": null, "location": "TBD", "duration": "abc" } ],
             "dutyStatuses": [ { "date": "2025-03-01", "status": 3, "startTime": "", "endTime": "10:00" } ] }"#,
    )
    .expect("lenient payload");

    assert!(plan.logs.is_empty());
    assert_eq!(plan.stops[0].kind, "");
    assert_eq!(plan.stops[0].duration, 0.0);
    assert_eq!(plan.duty_statuses()[0].status, "3");
    assert!(plan.duty_statuses()[0].start_time.is_none());
    assert!(plan.total_driving_time.is_none());
}

#[test]
fn test_duty_statuses_fall_back_to_trip() {
    let plan = PlanResponse::from_json(
        r#"{ "trip": { "duty_statuses": [ { "date": "2025-03-01", "status": "Driving", "start_time": "08:00", "end_time": "09:00" } ] } }"#,
    )
    .expect("payload");
    assert_eq!(plan.duty_statuses().len(), 1);
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(matches!(PlanResponse::from_json("{ not json"), Err(AppError::Payload(_))));
}

#[test]
fn test_day_views_per_date() {
    let views = Core::build_day_views(&fixture(), ThresholdMode::Verbatim);
    assert_eq!(views.len(), 2);

    let day1 = &views[0];
    assert_eq!(day1.date, "2025-03-01");
    let timeline = day1.timeline.as_ref().expect("timeline");
    assert_eq!(timeline.segments.len(), 4);
    assert_eq!(timeline.segments[3].duration_minutes, 120);
    assert_eq!(day1.stops.len(), 2);
    assert_eq!(day1.markers.len(), 2);
    assert!(day1.grid.is_some());

    let day2 = &views[1];
    assert_eq!(day2.timeline.as_ref().map(|t| t.skipped), Some(1));
    assert_eq!(day2.stops.len(), 1);
    assert!(day2.markers.is_empty());
}

#[test]
fn test_trip_summary() {
    let summary = Core::trip_summary(&fixture());
    assert_eq!(summary.start, "Chicago, IL");
    assert_eq!(summary.total_driving, "8.50 hours");
    assert_eq!(summary.total_on_duty, "13.00 hours");
    assert_eq!(summary.remaining_cycle, "48.25 hours");
    assert_eq!(summary.route_points, 3);

    let icons: String = summary.markers.iter().map(|m| m.icon).collect();
    assert_eq!(icons, "SPFD");
    assert_eq!(summary.markers[2].title, "fuel: -87.6, 41.8");
}

#[test]
fn test_summary_of_empty_plan() {
    let summary = Core::trip_summary(&PlanResponse::default());
    assert_eq!(summary.start, "Unknown");
    assert_eq!(summary.total_driving, "N/A");
    assert!(summary.markers.is_empty());
    assert_eq!(format_hours(Some(0.0)), "0.00 hours");
}

#[test]
fn test_trip_request_validation() {
    let ok = TripRequest::new(" Chicago ", "Indianapolis", "Nashville", Some(10.0)).expect("valid");
    assert_eq!(ok.current_location, "Chicago");

    for (c, p, d, cycle) in [
        ("", "b", "c", Some(1.0)),
        ("a", " ", "c", Some(1.0)),
        ("a", "b", "", Some(1.0)),
        ("a", "b", "c", None),
        ("a", "b", "c", Some(-1.0)),
        ("a", "b", "c", Some(70.5)),
    ] {
        assert!(matches!(TripRequest::new(c, p, d, cycle), Err(AppError::InvalidRequest(_))));
    }

    assert!(TripRequest::new("a", "b", "c", Some(70.0)).is_ok());
}

#[test]
fn test_service_error_message() {
    assert_eq!(service_error_message(r#"{"error": "Location not found"}"#), "Location not found");
    assert_eq!(service_error_message("<html>502</html>"), "Failed to plan trip.");
    assert_eq!(service_error_message(r#"{"detail": "x"}"#), "Failed to plan trip.");
}

#[test]
fn test_odd_coordinates_do_not_reject_the_payload() {
    let plan = PlanResponse::from_json(
        r#"{ "start_coords": "somewhere",
             "pickup_coords": ["-86.1", "39.7"],
             "end_coords": [1.0, 2.0, 3.0],
             "stop_coords": [[null, null], [-87.6, 41.8], "x"],
             "route_coordinates": [[-87.6, 41.8], [1.0], null, [-86.7, 36.1]],
             "logs": [ { "date": "2025-03-01", "driving_hours": 8 } ] }"#,
    )
    .expect("payload with odd coordinates");

    assert!(plan.start_coords.is_none());
    assert_eq!(plan.pickup_coords, Some([-86.1, 39.7]));
    assert!(plan.end_coords.is_none());
    assert_eq!(plan.stop_coords, vec![None, Some([-87.6, 41.8]), None]);
    assert_eq!(plan.route_coordinates, vec![[-87.6, 41.8], [-86.7, 36.1]]);
    assert_eq!(plan.logs.len(), 1);
}
