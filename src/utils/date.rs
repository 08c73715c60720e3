//! Date parsing and calendar-month window partitioning.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8 {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d") {
            return Ok(d);
        }
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// One calendar-month slice of the requested range. `start` is always the
/// first day of its month except possibly clipped by nothing (the first
/// window starts at the first of the start date's month); `end` is the last
/// day of the month or the overall end date, whichever is earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl MonthWindow {
    /// Feed window lower bound: UTC midnight of the start day, epoch millis.
    pub(crate) fn start_time_ms(&self) -> i64 {
        self.start
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis()
    }

    /// Feed window upper bound: 23:59:59.999 on the last day, so trips on
    /// that day are included.
    pub(crate) fn end_time_ms(&self) -> i64 {
        let midnight = self
            .end
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis();
        midnight + 86_400_000 - 1
    }

    /// Human label for progress output, e.g. "March 2024".
    pub(crate) fn label(&self) -> String {
        self.start.format("%B %Y").to_string()
    }
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    d - Days::new(u64::from(d.day0()))
}

/// Partition `[from, to]` into calendar-month windows. The first window
/// starts at the first of `from`'s month; the last window never extends
/// past `to`. Empty when `from > to`.
pub(crate) fn month_windows(from: NaiveDate, to: NaiveDate) -> Vec<MonthWindow> {
    let mut windows = Vec::new();
    let mut cursor = first_of_month(from);
    while cursor <= to {
        let next_month = cursor + Months::new(1);
        windows.push(MonthWindow {
            start: cursor,
            end: (next_month - Days::new(1)).min(to),
        });
        cursor = next_month;
    }
    windows
}
