mod common;
use common::tokyo_schedule;
use rmanhour::core::logic::Core;
use rmanhour::errors::AppError;
use rmanhour::export::{OutputFormat, render};
use rmanhour::models::report::Report;
use rmanhour::utils::time::parse_instant;

const EPS: f64 = 1e-9;

fn report(start: &str, end: &str, step: f64) -> Report {
    Core::build_report(
        parse_instant(start).expect("start"),
        parse_instant(end).expect("end"),
        &tokyo_schedule(),
        step,
    )
    .expect("report")
}

#[test]
fn test_same_day_report() {
    let r = report("2024-01-01T11:00+09:00", "2024-01-01T16:00+09:00", 0.1);

    assert_eq!(r.entries.len(), 2);
    assert!((r.total_hours - 4.0).abs() < EPS);
    assert!((r.total_man_hours - 4.0).abs() < EPS);

    assert_eq!(r.display_offset.local_minus_utc(), 9 * 3600);

    let first = &r.entries[0];
    assert_eq!(
        first.interval,
        "2024-01-01T11:00:00+09:00/2024-01-01T13:00:00+09:00"
    );
    assert_eq!(first.duration, "PT2H");
    assert!(!first.sentinel);
}

#[test]
fn test_sentinels_contribute_nothing() {
    let r = report("2024-01-01T20:00+09:00", "2024-01-02T09:30+09:00", 0.1);

    assert_eq!(r.entries.len(), 2);
    assert!(r.entries.iter().all(|e| e.sentinel));
    assert!(r.entries.iter().all(|e| e.duration == "PT0S"));
    assert_eq!(r.total_hours, 0.0);
    assert_eq!(r.total_man_hours, 0.0);
}

#[test]
fn test_total_is_rounded_once() {
    // 2h + 1h20m = 3h20m; entries round to 2.0 + 1.5, total to 3.5
    let r = report("2024-01-01T11:00+09:00", "2024-01-01T15:20+09:00", 0.5);

    assert!((r.entries[0].man_hours - 2.0).abs() < EPS);
    assert!((r.entries[1].man_hours - 1.5).abs() < EPS);
    assert!((r.total_man_hours - 3.5).abs() < EPS);

    let r = report("2024-01-01T11:10+09:00", "2024-01-01T14:10+09:00", 0.5);
    // 1h50m + 10m = 2h exactly; entries would sum to 2.5
    assert!((r.total_man_hours - 2.0).abs() < EPS);
}

#[test]
fn test_report_uses_start_offset_for_display() {
    let r = report("2024-01-01T02:00:00Z", "2024-01-01T03:00:00Z", 0.1);
    assert_eq!(r.display_offset.local_minus_utc(), 0);
    assert_eq!(r.entries[0].interval, "2024-01-01T02:00:00Z/2024-01-01T03:00:00Z");
}

#[test]
fn test_reversed_range_is_rejected() {
    let res = Core::build_report(
        parse_instant("2024-01-02T11:00+09:00").expect("start"),
        parse_instant("2024-01-01T11:00+09:00").expect("end"),
        &tokyo_schedule(),
        0.1,
    );
    assert!(matches!(res, Err(AppError::InvalidRange { .. })));
}

#[test]
fn test_bad_step_is_rejected() {
    let res = Core::build_report(
        parse_instant("2024-01-01T11:00+09:00").expect("start"),
        parse_instant("2024-01-01T12:00+09:00").expect("end"),
        &tokyo_schedule(),
        0.0,
    );
    assert!(matches!(res, Err(AppError::InvalidStep(_))));
}

#[test]
fn test_render_text() {
    let r = report("2024-01-01T11:00+09:00", "2024-01-01T16:00+09:00", 0.1);

    let short = render(&r, OutputFormat::Text, false).expect("text");
    assert_eq!(short, "Total: 4.0 man-hours (04h 00m worked)\n");

    let long = render(&r, OutputFormat::Text, true).expect("text");
    assert!(long.contains("man-hours"));
    assert!(long.contains("2024-01-01 11:00"));
    assert!(long.contains("2024-01-01 16:00"));
    assert!(long.contains("PT2H"));
    assert!(long.ends_with("Total: 4.0 man-hours (04h 00m worked)\n"));
}

#[test]
fn test_render_text_marks_sentinels() {
    let r = report("2024-01-01T20:00+09:00", "2024-01-02T09:30+09:00", 0.25);
    let long = render(&r, OutputFormat::Text, true).expect("text");

    assert!(!long.contains("PT0S"));
    assert!(long.contains("Total: 0.00 man-hours (00h 00m worked)"));
}

#[test]
fn test_render_json() {
    let r = report("2024-01-01T11:00+09:00", "2024-01-01T16:00+09:00", 0.1);
    let json = render(&r, OutputFormat::Json, false).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["total_man_hours"].as_f64(), Some(4.0));
    assert_eq!(value["entries"][1]["duration"], "PT2H");
    assert_eq!(value["entries"][0]["sentinel"], false);
    assert_eq!(value["start"], "2024-01-01T11:00:00+09:00");
    assert_eq!(value["display_offset"], "+09:00");
}

#[test]
fn test_render_csv() {
    let r = report("2024-01-01T11:00+09:00", "2024-01-01T16:00+09:00", 0.1);
    let csv = render(&r, OutputFormat::Csv, false).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "start,end,interval,duration,hours,man_hours,sentinel"
    );
    assert!(lines[1].starts_with("2024-01-01T11:00:00+09:00,2024-01-01T13:00:00+09:00,"));
    assert!(lines[1].ends_with(",PT2H,2,2,false"));
}
