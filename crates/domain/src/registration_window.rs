//! Date-window arithmetic for the discount and cleanup sweeps.
//!
//! All boundaries are computed in UTC. Month subtraction clamps to the last
//! day of the target month (2024-03-31 minus one month is 2024-02-29).

use chrono::{DateTime, Datelike, Months, NaiveTime, TimeDelta, Utc};
use serde::Serialize;

const LAST_MILLISECOND_OF_DAY: i64 = 86_399_999;

/// Dates are persisted with a four-digit year.
pub const MIN_STORABLE_YEAR: i32 = 0;
pub const MAX_STORABLE_YEAR: i32 = 9999;

pub fn validate_storable_date(date: DateTime<Utc>) -> Result<(), String> {
    let year = date.year();
    if !(MIN_STORABLE_YEAR..=MAX_STORABLE_YEAR).contains(&year) {
        return Err(format!(
            "year must be within {}..={}, got {}",
            MIN_STORABLE_YEAR, MAX_STORABLE_YEAR, year
        ));
    }
    Ok(())
}

pub fn subtract_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn start_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    date.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Last representable millisecond of the calendar day: 23:59:59.999.
pub fn end_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    let start = start_of_day(date);
    start
        .checked_add_signed(TimeDelta::milliseconds(LAST_MILLISECOND_OF_DAY))
        .unwrap_or(start)
}

/// Price multiplier for a discount percentage in `[0, 100]`.
pub fn discount_factor(percent: u8) -> f64 {
    debug_assert!(percent <= 100, "discount percent out of range: {percent}");
    f64::from(100u8.saturating_sub(percent)) / 100.0
}

/// Conjunction of bounds on a car's first registration date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationDateFilter {
    pub less_than: Option<DateTime<Utc>>,
    pub less_than_or_equal: Option<DateTime<Utc>>,
    pub greater_than_or_equal: Option<DateTime<Utc>>,
}

impl RegistrationDateFilter {
    pub fn older_than(boundary: DateTime<Utc>) -> Self {
        Self {
            less_than: Some(boundary),
            ..Self::default()
        }
    }

    pub fn between_inclusive(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            greater_than_or_equal: Some(start),
            less_than_or_equal: Some(end),
            ..Self::default()
        }
    }

    /// Records strictly before `start_of_day(reference - months_end)`.
    pub fn stale(reference: DateTime<Utc>, months_end: u32) -> Self {
        Self::older_than(start_of_day(subtract_months(reference, months_end)))
    }

    /// Records between `start_of_day(reference - months_end)` and
    /// `end_of_day(reference - months_start)`, both inclusive.
    pub fn discount_window(reference: DateTime<Utc>, months_start: u32, months_end: u32) -> Self {
        Self::between_inclusive(
            start_of_day(subtract_months(reference, months_end)),
            end_of_day(subtract_months(reference, months_start)),
        )
    }

    pub fn matches(&self, date: DateTime<Utc>) -> bool {
        self.less_than.map_or(true, |bound| date < bound)
            && self.less_than_or_equal.map_or(true, |bound| date <= bound)
            && self.greater_than_or_equal.map_or(true, |bound| date >= bound)
    }
}
