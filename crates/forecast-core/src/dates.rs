// File: crates/forecast-core/src/dates.rs
// Summary: Pure calendar helpers.

use chrono::{Duration, NaiveDate};

/// `date` shifted by `days` (negative goes back in time).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
