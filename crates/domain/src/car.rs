use crate::registration_window::validate_storable_date;
use crate::{Manufacturer, Owner};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A tracked vehicle with its manufacturer and owners expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub id: Option<i64>,
    pub manufacturer: Manufacturer,
    pub price: f64,
    pub first_registration_date: DateTime<Utc>,
    pub owners: Vec<Owner>,
}

impl Car {
    pub fn validate_price(price: f64) -> Result<(), String> {
        if !price.is_finite() {
            return Err(format!("price must be a finite number, got {}", price));
        }
        if price < 0.0 {
            return Err(format!("price cannot be negative, got {}", price));
        }
        Ok(())
    }

    pub fn validate_registration_date(date: DateTime<Utc>) -> Result<(), String> {
        validate_storable_date(date).map_err(|e| format!("first registration date: {}", e))
    }

    pub fn owner_ids(&self) -> Vec<i64> {
        self.owners.iter().filter_map(|o| o.id).collect()
    }
}

/// Insert payload for a car. Relations are referenced by id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub manufacturer_id: i64,
    pub price: f64,
    pub first_registration_date: DateTime<Utc>,
    pub owner_ids: Vec<i64>,
}

/// Partial update of a car. `None` leaves the field untouched; `owner_ids`
/// replaces the whole ordered owner list when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarUpdate {
    pub manufacturer_id: Option<i64>,
    pub price: Option<f64>,
    pub first_registration_date: Option<DateTime<Utc>>,
    pub owner_ids: Option<Vec<i64>>,
}

impl CarUpdate {
    pub fn is_empty(&self) -> bool {
        self.manufacturer_id.is_none()
            && self.price.is_none()
            && self.first_registration_date.is_none()
            && self.owner_ids.is_none()
    }
}
