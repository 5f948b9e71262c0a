use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional CLI date, falling back to `default` when absent.
pub fn parse_or(raw: Option<&String>, default: NaiveDate) -> AppResult<NaiveDate> {
    match raw {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(default),
    }
}

/// Monday of the last complete week before `day`.
pub fn last_monday(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64 + 7)
}

/// Sunday closing the week that starts at [`last_monday`].
pub fn last_sunday(day: NaiveDate) -> NaiveDate {
    last_monday(day) + Duration::days(6)
}
