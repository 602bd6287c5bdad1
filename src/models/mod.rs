pub mod interval;
pub mod report;
pub mod schedule;
pub mod time_of_day;
