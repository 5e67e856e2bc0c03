//! Date parsing and Korean display formatting for briefing pages.

use crate::errors::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Parses a `YYYY-MM-DD` date as used in briefing URLs.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Formats a date as `2025년 9월 5일` (no zero padding).
#[must_use]
pub fn format_korean_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// Formats a run start time as `2025년 6월 22일, 10:48`.
#[must_use]
pub fn format_korean_datetime(at: NaiveDateTime) -> String {
    format!(
        "{}, {:02}:{:02}",
        format_korean_date(at.date()),
        at.hour(),
        at.minute()
    )
}

/// Formats the elapsed time between `then` and `now` the way the alert feed
/// shows it: `방금 전`, `15분 전`, `2시간 전`, `3일 전`.
///
/// Timestamps in the future are treated as "just now".
#[must_use]
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "방금 전".to_string()
    } else if minutes < 60 {
        format!("{minutes}분 전")
    } else if elapsed.num_hours() < 24 {
        format!("{}시간 전", elapsed.num_hours())
    } else {
        format!("{}일 전", elapsed.num_days())
    }
}
