use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use motorpool_domain::registration_window::{validate_storable_date, MIN_STORABLE_YEAR};
use motorpool_domain::DomainError;

const FIRST_STORABLE: &str = "0000-01-01T00:00:00.000Z";
const LAST_STORABLE: &str = "9999-12-31T23:59:59.999Z";

fn render(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fixed-width UTC text, e.g. `2024-06-15T00:00:00.000Z`. Lexicographic order
/// equals chronological order, so years outside 0000..=9999 are refused.
pub fn to_db(date: DateTime<Utc>) -> Result<String, DomainError> {
    validate_storable_date(date).map_err(DomainError::InvalidTimestamp)?;
    Ok(render(date))
}

/// Query bound text. Bounds outside the storable range are clamped, which
/// keeps comparisons against stored values correct.
pub fn bound_to_db(date: DateTime<Utc>) -> String {
    match to_db(date) {
        Ok(text) => text,
        Err(_) if date.year() < MIN_STORABLE_YEAR => FIRST_STORABLE.to_string(),
        Err(_) => LAST_STORABLE.to_string(),
    }
}

pub fn from_db(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidTimestamp(format!("'{}': {}", value, e)))
}
