pub mod cars;
pub mod maintenance;
pub mod manufacturers;
pub mod owners;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use motorpool_domain::registration_window::validate_storable_date;
use serde::Serialize;

/// Accepts RFC 3339 (`2024-06-15T09:30:00Z`) or a bare date
/// (`2024-06-15`, read as midnight UTC). Years must fit in four digits.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, String> {
    let date = match DateTime::parse_from_rfc3339(value) {
        Ok(date) => date.with_timezone(&Utc),
        Err(_) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .map_err(|_| format!("'{}' is neither RFC 3339 nor YYYY-MM-DD", value))?,
    };
    validate_storable_date(date).map_err(|e| format!("'{}': {}", value, e))?;
    Ok(date)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
