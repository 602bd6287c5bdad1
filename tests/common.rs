#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use rmanhour::models::interval::Interval;
use rmanhour::models::schedule::Schedule;
use rmanhour::utils::time::parse_instant;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rmh() -> Command {
    cargo_bin_cmd!("rmanhour")
}

/// Work 10:00–19:00, break 13:00–14:00, cutoff 05:00, all at +09:00.
pub const SCHEDULE_YAML: &str = r#"work_start: "10:00+09:00"
work_end: "19:00+09:00"
work_period: "05:00+09:00"
break_start: "13:00+09:00"
break_end: "14:00+09:00"
step: 0.1
format: text
"#;

pub fn tokyo_schedule() -> Schedule {
    Schedule {
        work_start: "10:00+09:00".parse().expect("work start"),
        work_end: "19:00+09:00".parse().expect("work end"),
        work_period: "05:00+09:00".parse().expect("work period"),
        break_start: "13:00+09:00".parse().expect("break start"),
        break_end: "14:00+09:00".parse().expect("break end"),
    }
}

pub fn at(s: &str) -> DateTime<Utc> {
    parse_instant(s).expect("valid instant").with_timezone(&Utc)
}

pub fn iv(start: &str, end: &str) -> Interval {
    Interval::new(at(start), at(end))
}

pub fn sentinel(s: &str) -> Interval {
    Interval::sentinel(at(s))
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmanhour.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the test schedule to a fresh config file and return its path.
pub fn setup_test_config(name: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, SCHEDULE_YAML).expect("write test config");
    path
}
