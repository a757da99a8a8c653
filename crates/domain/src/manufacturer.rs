use serde::Serialize;
use std::sync::Arc;

/// Vehicle manufacturer, identified by its SIRET business number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manufacturer {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub siret: i64,
    pub phone: Arc<str>,
}

impl Manufacturer {
    pub fn new(name: &str, siret: i64, phone: &str) -> Self {
        Self {
            id: None,
            name: Arc::from(name),
            siret,
            phone: Arc::from(phone),
        }
    }
}
