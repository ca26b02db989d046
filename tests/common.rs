#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhl() -> Command {
    cargo_bin_cmd!("rhoslogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhoslogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty snapshot directory inside tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhoslogger_snapshots", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Two-day planning response: an overnight sleeper period, a TBD stop
/// and a log whose stop is matched by type and location only.
pub const PLAN_JSON: &str = r#"{
  "trip": {
    "current_location": "Chicago, IL",
    "pickup_location": "Indianapolis, IN",
    "dropoff_location": "Nashville, TN"
  },
  "duty_statuses": [
    { "date": "2025-03-01", "status": "On Duty (Not Driving)", "start_time": "06:00", "end_time": "07:00", "remarks": "Pre-trip inspection" },
    { "date": "2025-03-01", "status": "Driving", "start_time": "07:00", "end_time": "11:30" },
    { "date": "2025-03-01", "status": "Off Duty", "start_time": "11:30", "end_time": "12:00" },
    { "date": "2025-03-01", "status": "Sleeper Berth", "start_time": "23:00", "end_time": "01:00" },
    { "date": "2025-03-02", "status": "Driving", "start_time": "08:00", "end_time": null },
    { "date": "2025-03-02", "status": "Driving", "start_time": "09:00", "end_time": "13:00" }
  ],
  "logs": [
    { "date": "2025-03-01", "driving_hours": 4.5, "on_duty_hours": 7, "off_duty_hours": 3,
      "stops": [ { "type": "rest", "location": "-86.1, 39.7", "duration": 0.5 } ] },
    { "date": "2025-03-02", "driving_hours": "4", "on_duty_hours": 6, "off_duty_hours": 10 }
  ],
  "stops": [
    { "type": "fuel", "location": "-87.6, 41.8", "duration": 0.5, "time": "2025-03-01T09:00:00Z" },
    { "type": "rest", "location": "-86.1, 39.7", "duration": 0.5, "time": null },
    { "type": "fuel", "location": "TBD", "duration": 0.5, "time": "2025-03-02T10:00:00Z" }
  ],
  "route_coordinates": [[-87.6, 41.8], [-86.1, 39.7], [-86.7, 36.1]],
  "start_coords": [-87.6, 41.8],
  "pickup_coords": [-86.1, 39.7],
  "stop_coords": [[-87.6, 41.8], null, null],
  "end_coords": [-86.7, 36.1],
  "total_driving_time": 8.5,
  "total_on_duty_time": 13,
  "remaining_cycle": 48.25
}"#;

/// Write [`PLAN_JSON`] to a temp file and return its path
pub fn write_plan_fixture(name: &str) -> String {
    let path = temp_out(name, "json");
    fs::write(&path, PLAN_JSON).expect("write plan fixture");
    path
}

/// Initialize a test DB and import the fixture plan
pub fn init_db_with_plan(name: &str) -> String {
    let db_path = setup_test_db(name);

    rhl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let fixture = write_plan_fixture(&format!("{name}_plan"));
    rhl()
        .args(["--db", &db_path, "plan", "--file", &fixture])
        .assert()
        .success();

    db_path
}
