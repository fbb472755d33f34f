//! Date helpers
//!
//! All date-string parsing happens at the API handler layer; repositories
//! only see `chrono::NaiveDate` and `i64` Unix millis.

use chrono::{Local, NaiveDate};

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Validate a date range (start must not be after end)
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if start > end {
        return Err(AppError::validation(format!(
            "startDate {} is after endDate {}",
            start, end
        )));
    }
    Ok(())
}

/// Today's calendar date in server-local time (attendance day boundary)
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Elapsed hours between two Unix-millis instants, rounded to two decimals
pub fn hours_between(start_millis: i64, end_millis: i64) -> f64 {
    let hours = (end_millis - start_millis) as f64 / 3_600_000.0;
    shared::util::round2(hours)
}
