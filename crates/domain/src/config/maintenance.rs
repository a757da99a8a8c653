use crate::maintenance::{
    DiscountCleanupSettings, DEFAULT_DISCOUNT_PERCENT, DEFAULT_MONTHS_END, DEFAULT_MONTHS_START,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Business constants of the discount-and-cleanup run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MaintenanceConfig {
    #[serde(default = "default_discount_percent")]
    pub discount_percent: u8,

    #[serde(default = "default_months_start")]
    pub months_start: u32,

    #[serde(default = "default_months_end")]
    pub months_end: u32,
}

impl MaintenanceConfig {
    pub fn settings_at(&self, reference_date: DateTime<Utc>) -> DiscountCleanupSettings {
        DiscountCleanupSettings::new(
            reference_date,
            self.discount_percent,
            self.months_start,
            self.months_end,
        )
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            discount_percent: default_discount_percent(),
            months_start: default_months_start(),
            months_end: default_months_end(),
        }
    }
}

fn default_discount_percent() -> u8 {
    DEFAULT_DISCOUNT_PERCENT
}

fn default_months_start() -> u32 {
    DEFAULT_MONTHS_START
}

fn default_months_end() -> u32 {
    DEFAULT_MONTHS_END
}
