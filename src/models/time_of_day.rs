use crate::errors::{AppError, AppResult};
use crate::utils::time::format_offset;
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, TimeDelta, Timelike, Utc, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TIME_OF_DAY_PATTERN: &str = r"^(\d{2}):(\d{2})(Z|[+-]\d{2}:\d{2})$";

/// A recurring daily boundary: a wall-clock time pinned to a fixed UTC offset,
/// e.g. `10:00+09:00` or `05:00Z`.
///
/// It is not an instant. [`TimeOfDay::resolve`] turns it into one for a given
/// calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    pub time: NaiveTime,
    pub offset: FixedOffset,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, offset: FixedOffset) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time, offset })
    }

    /// Resolve this boundary on the calendar day of `reference` (as seen in
    /// this value's own offset), shifted by `days_after` days.
    pub fn resolve(&self, reference: DateTime<Utc>, days_after: i64) -> DateTime<Utc> {
        let date =
            reference.with_timezone(&self.offset).date_naive() + TimeDelta::days(days_after);
        let local = date.and_time(self.time);
        let utc = local - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()));

        DateTime::from_naive_utc_and_offset(utc, Utc)
    }

    /// Weekday of `instant` in this value's offset.
    pub fn weekday_on(&self, instant: DateTime<Utc>) -> Weekday {
        instant.with_timezone(&self.offset).weekday()
    }
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    if raw == "Z" {
        return FixedOffset::east_opt(0);
    }

    let sign = match raw.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hours, minutes) = raw.get(1..)?.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidTimeOfDay(s.to_string());

        let re = Regex::new(TIME_OF_DAY_PATTERN).map_err(|e| AppError::Other(e.to_string()))?;
        let caps = re.captures(s.trim()).ok_or_else(invalid)?;

        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        let offset = parse_offset(&caps[3]).ok_or_else(invalid)?;

        TimeOfDay::new(hour, minute, offset).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}{}",
            self.time.hour(),
            self.time.minute(),
            format_offset(&self.offset)
        )
    }
}
