mod common;
use common::{init_db_with_plan, rhl, setup_test_db, temp_dir, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rhl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_commands_without_plan_fail() {
    let db_path = setup_test_db("cli_no_plan");
    rhl().args(["--db", &db_path, "--test", "init"]).assert().success();

    rhl()
        .args(["--db", &db_path, "summary"])
        .assert()
        .failure()
        .stderr(contains("No trip plan stored"));
}

#[test]
fn test_plan_request_is_validated_before_sending() {
    let db_path = setup_test_db("cli_plan_invalid");
    rhl().args(["--db", &db_path, "--test", "init"]).assert().success();

    rhl()
        .args([
            "--db", &db_path, "plan", "--current", "Chicago", "--pickup", "Indianapolis",
            "--dropoff", "Nashville", "--cycle-used", "80",
        ])
        .assert()
        .failure()
        .stderr(contains("between 0 and 70"));
}

#[test]
fn test_summary_output() {
    let db_path = init_db_with_plan("cli_summary");

    rhl()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Chicago, IL"))
        .stdout(contains("8.50 hours"))
        .stdout(contains("48.25 hours"));
}

#[test]
fn test_timeline_output() {
    let db_path = init_db_with_plan("cli_timeline");

    rhl()
        .args(["--db", &db_path, "timeline", "--date", "2025-03-01"])
        .assert()
        .success()
        .stdout(contains("Duty status timeline for 2025-03-01"))
        .stdout(contains("Sleeper Berth (23:00 - 01:00)"))
        .stdout(contains("2h 0m"))
        .stdout(contains("Pre-trip inspection"));
}

#[test]
fn test_timeline_rejects_bad_date() {
    let db_path = init_db_with_plan("cli_timeline_bad_date");

    rhl()
        .args(["--db", &db_path, "timeline", "--date", "03/01/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_grid_output() {
    let db_path = init_db_with_plan("cli_grid");

    rhl()
        .args(["--db", &db_path, "grid", "--date", "2025-03-01"])
        .assert()
        .success()
        .stdout(contains("Daily log for 2025-03-01"))
        .stdout(contains("driving=5, on-duty=2, off-duty=3, sleeper=14"));

    rhl()
        .args(["--db", &db_path, "grid", "--date", "2025-03-01", "--mode", "cumulative"])
        .assert()
        .success()
        .stdout(contains("driving=5, on-duty=7, off-duty=3, sleeper=9"));
}

#[test]
fn test_stops_output() {
    let db_path = init_db_with_plan("cli_stops");

    rhl()
        .args(["--db", &db_path, "stops", "--date", "2025-03-02"])
        .assert()
        .success()
        .stdout(contains("TBD"))
        .stdout(contains("0 of 1 stop(s) on the map"));
}

#[test]
fn test_png_export_fires_once() {
    let db_path = init_db_with_plan("cli_png");
    let dir = temp_dir("cli_png");
    let dir_s = dir.to_string_lossy().to_string();

    rhl()
        .args(["--db", &db_path, "export", "--format", "png", "--dir", &dir_s])
        .assert()
        .success()
        .stdout(contains("PNG export completed"));

    assert!(dir.join("log_2025-03-01.png").exists());
    assert!(dir.join("log_2025-03-02.png").exists());

    rhl()
        .args(["--db", &db_path, "export", "--format", "png", "--dir", &dir_s])
        .assert()
        .success()
        .stdout(contains("already exported"));

    rhl()
        .args(["--db", &db_path, "export", "--dir", &dir_s, "--date", "2025-03-02", "--force"])
        .assert()
        .success()
        .stdout(contains("log_2025-03-02.png"));

    rhl()
        .args(["--db", &db_path, "log", "--exports"])
        .assert()
        .success()
        .stdout(contains("2025-03-01"));
}

#[test]
fn test_json_export() {
    let db_path = init_db_with_plan("cli_json");
    let out = temp_out("cli_json", "json");

    rhl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert!(content.contains("Pre-trip inspection"));
}

#[test]
fn test_csv_export_for_one_day() {
    let db_path = init_db_with_plan("cli_csv");
    let out = temp_out("cli_csv", "csv");

    rhl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--date", "2025-03-02",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,row,status"));
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("2025-03-02,1,Driving,09:00,13:00,240,4h 0m"));
}

#[test]
fn test_csv_export_requires_file() {
    let db_path = init_db_with_plan("cli_csv_no_file");

    rhl()
        .args(["--db", &db_path, "export", "--format", "csv"])
        .assert()
        .failure()
        .stderr(contains("--file is required"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = init_db_with_plan("cli_log");

    rhl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("plan"));
}

#[test]
fn test_config_print_shows_overridden_database() {
    let db_path = setup_test_db("cli_config_print");

    rhl()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_url"))
        .stdout(contains(db_path.as_str()));
}
