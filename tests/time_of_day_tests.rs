mod common;
use chrono::{FixedOffset, NaiveTime, TimeDelta, Weekday};
use common::at;
use rmanhour::errors::AppError;
use rmanhour::models::time_of_day::TimeOfDay;
use rmanhour::utils::time::{format_iso_duration, parse_instant};

#[test]
fn test_parse_offsets() {
    let t: TimeOfDay = "10:00+09:00".parse().expect("parse");
    assert_eq!(t.time, NaiveTime::from_hms_opt(10, 0, 0).expect("time"));
    assert_eq!(t.offset, FixedOffset::east_opt(9 * 3600).expect("offset"));

    let z: TimeOfDay = "05:00Z".parse().expect("parse");
    assert_eq!(z.offset.local_minus_utc(), 0);

    let neg: TimeOfDay = "23:59-05:30".parse().expect("parse");
    assert_eq!(neg.offset.local_minus_utc(), -(5 * 3600 + 30 * 60));
}

#[test]
fn test_rejects_malformed() {
    for bad in [
        "24:00Z",
        "10:60Z",
        "10:00",
        "1:00Z",
        "10:00+9:00",
        "10:00+24:00",
        "10:00+09:60",
        "10:00 +09:00",
        "",
    ] {
        let res = bad.parse::<TimeOfDay>();
        assert!(
            matches!(res, Err(AppError::InvalidTimeOfDay(_))),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn test_display_round_trip() {
    for raw in ["10:00+09:00", "05:00Z", "23:59-05:30"] {
        let t: TimeOfDay = raw.parse().expect("parse");
        assert_eq!(t.to_string(), raw);
        assert_eq!(t.to_string().parse::<TimeOfDay>().expect("reparse"), t);
    }

    let utc: TimeOfDay = "08:00+00:00".parse().expect("parse");
    assert_eq!(utc.to_string(), "08:00Z");
}

#[test]
fn test_resolve_uses_own_offset_for_the_date() {
    let t: TimeOfDay = "10:00+09:00".parse().expect("parse");

    // 20:00Z on Jan 1 is already Jan 2 in +09:00
    let reference = at("2024-01-01T20:00:00Z");
    assert_eq!(t.resolve(reference, 0), at("2024-01-02T10:00+09:00"));
    assert_eq!(t.resolve(reference, 1), at("2024-01-03T10:00+09:00"));
    assert_eq!(t.weekday_on(reference), Weekday::Tue);
}

#[test]
fn test_serde_as_string() {
    let t: TimeOfDay = serde_yaml::from_str("\"13:00+09:00\"").expect("deserialize");
    assert_eq!(t.to_string(), "13:00+09:00");
    assert!(serde_yaml::from_str::<TimeOfDay>("\"13:00\"").is_err());

    let json = serde_json::to_string(&t).expect("serialize");
    assert_eq!(json, "\"13:00+09:00\"");
}

#[test]
fn test_parse_instant_forms() {
    let expected = at("2024-01-01T02:00:00Z");
    assert_eq!(
        parse_instant("2024-01-01T11:00+09:00").expect("minute form"),
        expected
    );
    assert_eq!(
        parse_instant("2024-01-01T11:00:00+09:00").expect("rfc3339"),
        expected
    );
    assert_eq!(parse_instant("2024-01-01T02:00Z").expect("zulu"), expected);
    assert!(parse_instant("2024-01-01T00:00:00").is_ok());
    assert!(matches!(
        parse_instant("yesterday"),
        Err(AppError::InvalidInstant(_))
    ));
}

#[test]
fn test_iso_duration() {
    assert_eq!(format_iso_duration(TimeDelta::zero()), "PT0S");
    assert_eq!(format_iso_duration(TimeDelta::hours(2)), "PT2H");
    assert_eq!(format_iso_duration(TimeDelta::minutes(90)), "PT1H30M");
    assert_eq!(format_iso_duration(TimeDelta::seconds(45)), "PT45S");
    assert_eq!(format_iso_duration(TimeDelta::hours(26)), "P1DT2H");
    assert_eq!(format_iso_duration(TimeDelta::days(1)), "P1D");
}
