#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rweekplan::core::week::{Week, week_of};
use rweekplan::models::schedule::WeekSchedule;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwp() -> Command {
    cargo_bin_cmd!("rweekplan")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rweekplan.sqlite", name));
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

/// Initialize the DB and pin the current week to Mon 2024-01-01 .. Sun 2024-01-07
pub fn init_db_on_test_week(db_path: &str) {
    rwp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rwp()
        .args(["--db", db_path, "nav", "--date", "2024-01-03", "--no-color"])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Mon 2024-01-01 .. Sun 2024-01-07
pub fn test_week() -> Week {
    week_of(d("2024-01-03")).expect("test week")
}

/// Schedule with the default layout on every day of `week`.
pub fn initialized(week: &Week) -> WeekSchedule {
    let mut schedule = WeekSchedule::new();
    for date in week {
        schedule.init_day(*date);
    }
    schedule
}
