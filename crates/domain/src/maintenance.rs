use crate::registration_window::{discount_factor, RegistrationDateFilter};
use crate::{Car, DomainError};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_DISCOUNT_PERCENT: u8 = 20;
pub const DEFAULT_MONTHS_START: u32 = 12;
pub const DEFAULT_MONTHS_END: u32 = 18;

/// Parameters of one discount-and-cleanup run.
///
/// `months_start` is the nearer boundary of the discount window and
/// `months_end` the farther one; cars registered before the farther boundary
/// are stale and lose their owners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountCleanupSettings {
    pub reference_date: DateTime<Utc>,
    pub discount_percent: u8,
    pub months_start: u32,
    pub months_end: u32,
}

impl DiscountCleanupSettings {
    pub fn new(
        reference_date: DateTime<Utc>,
        discount_percent: u8,
        months_start: u32,
        months_end: u32,
    ) -> Self {
        Self {
            reference_date,
            discount_percent,
            months_start,
            months_end,
        }
    }

    /// 20% off for cars registered 12 to 18 months before `reference_date`.
    pub fn reference(reference_date: DateTime<Utc>) -> Self {
        Self::new(
            reference_date,
            DEFAULT_DISCOUNT_PERCENT,
            DEFAULT_MONTHS_START,
            DEFAULT_MONTHS_END,
        )
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.discount_percent > 100 {
            return Err(DomainError::InvalidMaintenanceSettings(format!(
                "discount percent must be within 0..=100, got {}",
                self.discount_percent
            )));
        }
        if self.months_end <= self.months_start {
            return Err(DomainError::InvalidMaintenanceSettings(format!(
                "months_end ({}) must be greater than months_start ({})",
                self.months_end, self.months_start
            )));
        }
        Ok(())
    }

    pub fn discount_factor(&self) -> f64 {
        discount_factor(self.discount_percent)
    }

    pub fn stale_filter(&self) -> RegistrationDateFilter {
        RegistrationDateFilter::stale(self.reference_date, self.months_end)
    }

    pub fn discount_filter(&self) -> RegistrationDateFilter {
        RegistrationDateFilter::discount_window(
            self.reference_date,
            self.months_start,
            self.months_end,
        )
    }
}

/// Outcome of a bulk store mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetachOwnersResult {
    pub cars_before_detach: Vec<Car>,
    pub result: WriteOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplyDiscountResult {
    pub cars_before_update: Vec<Car>,
    pub cars_after_update: Vec<Car>,
    pub result: WriteOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountCleanupSummary {
    pub settings: DiscountCleanupSettings,
    pub detached_owners: DetachOwnersResult,
    pub discounted_cars: ApplyDiscountResult,
}
