//! Schedule walker: splits `[start, end]` into the sub-intervals that fall
//! inside a recurring daily work schedule.
//!
//! Each loop iteration looks at the cursor's calendar day:
//!
//! 1. carve the break out of the day when `end` reaches past it;
//! 2. stop at `end` if the query finishes before the next day's work-period
//!    cutoff;
//! 3. otherwise close the day at the nominal work end, or emit a zero-length
//!    sentinel when the cursor is already past it;
//! 4. jump to the next work start (skipping weekends), or emit a trailing
//!    sentinel when `end` falls in the dead zone before it.

use crate::models::interval::Interval;
use crate::models::schedule::Schedule;
use chrono::{DateTime, Utc, Weekday};
use tracing::trace;

/// Walk `[start, end]` against `schedule`.
///
/// The result is ordered and non-overlapping. It may contain zero-length
/// sentinel intervals (see [`Interval`]). `start >= end` yields an empty
/// sequence.
pub fn walk(start: DateTime<Utc>, end: DateTime<Utc>, schedule: &Schedule) -> Vec<Interval> {
    let mut out = Vec::new();
    let mut cursor = start;

    while cursor < end {
        let anchor = cursor;
        let break_start = schedule.break_start.resolve(anchor, 0);
        let break_end = schedule.break_end.resolve(anchor, 0);
        let work_end = schedule.work_end.resolve(anchor, 0);
        let period_boundary = schedule.work_period.resolve(anchor, 1);

        // 1. break carve-out
        if end > break_end && cursor < break_start {
            push(&mut out, Interval::new(cursor, break_start));
            cursor = break_end;
        }

        // 2. query ends inside the current working period
        if end < period_boundary {
            push(&mut out, Interval::new(cursor, end));
            break;
        }

        // 3. close the day
        if cursor < work_end {
            push(&mut out, Interval::new(cursor, work_end));
            cursor = work_end;
        } else {
            push(&mut out, Interval::sentinel(cursor));
        }

        // 4. next work start
        let next_cursor = next_work_start(anchor, cursor, schedule);

        // 5. end falls between the cutoff and the next work start
        if end > period_boundary && end < next_cursor {
            push(&mut out, Interval::sentinel(end));
            break;
        }

        // 6.
        cursor = next_cursor;
    }

    out
}

fn push(out: &mut Vec<Interval>, interval: Interval) {
    trace!(
        start = %interval.start,
        end = %interval.end,
        sentinel = interval.is_sentinel(),
        "emit interval"
    );
    out.push(interval);
}

/// Work start on the day after `anchor`, moved to Monday when that day falls
/// on a weekend. Always strictly later than `cursor`.
fn next_work_start(anchor: DateTime<Utc>, cursor: DateTime<Utc>, schedule: &Schedule) -> DateTime<Utc> {
    let mut days = 1;

    loop {
        let candidate = schedule.work_start.resolve(anchor, days);
        let skip = match schedule.work_start.weekday_on(candidate) {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => 0,
        };
        let next = if skip == 0 {
            candidate
        } else {
            schedule.work_start.resolve(anchor, days + skip)
        };

        // only reachable with schedules mixing far-apart offsets
        if next > cursor {
            return next;
        }
        days += skip + 1;
    }
}
