use crate::registration_window::validate_storable_date;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Owner {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub purchase_date: DateTime<Utc>,
}

impl Owner {
    pub fn new(name: &str, purchase_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: Arc::from(name),
            purchase_date,
        }
    }

    pub fn validate_purchase_date(date: DateTime<Utc>) -> Result<(), String> {
        validate_storable_date(date).map_err(|e| format!("purchase date: {}", e))
    }
}
