use rhoslogger::core::calculator::grouping::group_by_date;
use rhoslogger::core::calculator::timeline::{
    MIN_CONTAINER_HEIGHT_PX, MIN_WIDTH_PERCENT, ROW_HEIGHT_PX, TimelineLayout, layout_day,
    layout_segment,
};
use rhoslogger::models::duty_event::DutyStatusEvent;
use rhoslogger::models::duty_status::SegmentStyle;

fn ev(status: &str, start: &str, end: &str) -> DutyStatusEvent {
    DutyStatusEvent::new("2025-03-01", status, start, end)
}

#[test]
fn test_segment_geometry() {
    let seg = layout_segment(0, &ev("Driving", "06:00", "12:00")).expect("segment");
    assert_eq!(seg.start_minutes, 360);
    assert_eq!(seg.duration_minutes, 360);
    assert!((seg.left_offset_percent - 25.0).abs() < 1e-9);
    assert!((seg.width_percent - 25.0).abs() < 1e-9);
    assert_eq!(seg.style, SegmentStyle::Driving);
    assert_eq!(seg.label(), "Driving (06:00 - 12:00)");
    assert_eq!(seg.duration_label(), "6h 0m");
}

#[test]
fn test_short_segment_is_widened_but_keeps_real_duration() {
    let seg = layout_segment(0, &ev("Off Duty", "10:00", "10:01")).expect("segment");
    assert_eq!(seg.duration_minutes, 1);
    assert_eq!(seg.width_percent, MIN_WIDTH_PERCENT);
    assert_eq!(seg.duration_label(), "0h 1m");
}

#[test]
fn test_overnight_segment() {
    let seg = layout_segment(0, &ev("Sleeper Berth", "23:00", "01:00")).expect("segment");
    assert_eq!(seg.duration_minutes, 120);
    assert_eq!(seg.end_minutes, 1500);
    assert_eq!(seg.style, SegmentStyle::Sleeper);
}

#[test]
fn test_unknown_status_gets_neutral_style() {
    let seg = layout_segment(0, &ev("Yard Move", "10:00", "11:00")).expect("segment");
    assert_eq!(seg.style, SegmentStyle::Neutral);
}

#[test]
fn test_rows_follow_input_position_and_skip_incomplete_events() {
    let mut incomplete = ev("Driving", "08:00", "09:00");
    incomplete.end_time = None;

    let events = vec![
        ev("On Duty (Not Driving)", "06:00", "07:00"),
        incomplete,
        ev("Driving", "07:00", "11:00").with_remarks("Left the yard"),
    ];

    let layout = layout_day("2025-03-01", &events);
    assert_eq!(layout.rows, 3);
    assert_eq!(layout.skipped, 1);
    assert_eq!(layout.segments.len(), 2);
    assert_eq!(layout.segments[0].row_index, 0);
    assert_eq!(layout.segments[1].row_index, 2);
    assert_eq!(layout.segments[1].top_px(), 2 * ROW_HEIGHT_PX);

    assert_eq!(layout.remarks.len(), 1);
    assert_eq!(layout.remarks[0].time, "07:00");
    assert_eq!(layout.remarks[0].text, "Left the yard");
}

#[test]
fn test_container_height_has_a_floor() {
    let empty = TimelineLayout::default();
    assert_eq!(empty.container_height_px(), MIN_CONTAINER_HEIGHT_PX);

    let events: Vec<_> = (0..10).map(|_| ev("Driving", "01:00", "02:00")).collect();
    let layout = layout_day("2025-03-01", &events);
    assert!(layout.container_height_px() > MIN_CONTAINER_HEIGHT_PX);
}

#[test]
fn test_hour_ticks() {
    let ticks = TimelineLayout::hour_ticks();
    assert_eq!(ticks[0], 0.0);
    assert!((ticks[12] - 50.0).abs() < 1e-9);
    assert!((ticks[23] - 95.833_333).abs() < 1e-3);
}

#[test]
fn test_group_by_date_keeps_first_seen_order() {
    let events = vec![
        DutyStatusEvent::new("2025-03-02", "Driving", "08:00", "09:00"),
        DutyStatusEvent::new("2025-03-01", "Driving", "08:00", "09:00"),
        DutyStatusEvent::new("2025-03-02", "Off Duty", "09:00", "10:00"),
    ];

    let groups = group_by_date(&events);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, "2025-03-02");
    assert_eq!(groups[0].events.len(), 2);
    assert_eq!(groups[0].events[1].status, "Off Duty");
    assert_eq!(groups[1].date, "2025-03-01");
}

#[test]
fn test_group_by_date_empty() {
    assert!(group_by_date(&[]).is_empty());
}

#[test]
fn test_identical_events_get_distinct_rows() {
    let events = vec![ev("Driving", "08:00", "10:00"), ev("Driving", "08:00", "10:00")];
    let layout = layout_day("2025-03-01", &events);

    assert_eq!(layout.segments.len(), 2);
    assert_eq!(layout.segments[0].row_index, 0);
    assert_eq!(layout.segments[1].row_index, 1);
    assert_eq!(layout.segments[0].left_offset_percent, layout.segments[1].left_offset_percent);
}

#[test]
fn test_segment_from_times_with_seconds() {
    let seg = layout_segment(0, &ev("Driving", "08:30:00", "10:00:00")).expect("segment");
    assert_eq!(seg.start_minutes, 510);
    assert_eq!(seg.duration_minutes, 90);
}
