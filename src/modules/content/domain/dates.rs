//! Conversions between the forms' editable date strings and the
//! stored timestamp representation. Experience and education edit at
//! month precision (`YYYY-MM`), certifications and projects at day
//! precision (`YYYY-MM-DD`). Stored values are UTC midnights.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Parse a month-precision form value to the first day of that month.
pub fn parse_month(value: &str) -> Option<DateTime<Utc>> {
    let (year, month) = value.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(midnight_utc(date))
}

/// Parse a day-precision form value.
pub fn parse_day(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(midnight_utc(date))
}

pub fn month_string(value: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", value.year(), value.month())
}

pub fn day_string(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        Utc,
    )
}
