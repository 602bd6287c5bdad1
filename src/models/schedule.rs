use crate::models::time_of_day::TimeOfDay;
use chrono::{FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};

/// The recurring daily work schedule the walker splits time against.
///
/// Fields are not checked against each other: a break that ends before it
/// starts is accepted and simply yields whatever the walker's rules produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub work_start: TimeOfDay,
    pub work_end: TimeOfDay,
    /// Daily cutoff, always resolved on the day after the cursor.
    pub work_period: TimeOfDay,
    pub break_start: TimeOfDay,
    pub break_end: TimeOfDay,
}

fn at(hour: u32, offset: FixedOffset) -> TimeOfDay {
    TimeOfDay {
        time: NaiveTime::MIN + chrono::TimeDelta::hours(i64::from(hour)),
        offset,
    }
}

impl Schedule {
    /// Built-in schedule: 09:00–18:00, break 12:00–13:00, cutoff 05:00.
    pub fn default_with_offset(offset: FixedOffset) -> Self {
        Self {
            work_start: at(9, offset),
            work_end: at(18, offset),
            work_period: at(5, offset),
            break_start: at(12, offset),
            break_end: at(13, offset),
        }
    }
}
