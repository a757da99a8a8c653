use crate::ports::CarRepository;
use chrono::Utc;
use motorpool_domain::{
    ApplyDiscountResult, DetachOwnersResult, DiscountCleanupSettings, DiscountCleanupSummary,
    DomainError,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case: discount cars in the age window and detach the owners of
/// cars older than it.
///
/// Both sweeps run on every invocation, stale sweep first. Each store call is
/// atomic on its own; the run as a whole is not, and a failing step leaves
/// earlier steps committed. Re-running compounds the discount.
pub struct ApplyDiscountAndCleanupUseCase {
    car_repo: Arc<dyn CarRepository>,
}

impl ApplyDiscountAndCleanupUseCase {
    pub fn new(car_repo: Arc<dyn CarRepository>) -> Self {
        Self { car_repo }
    }

    /// Reference run: now, 20% off, 12 to 18 months window.
    pub async fn run_now(&self) -> Result<DiscountCleanupSummary, DomainError> {
        self.execute(&DiscountCleanupSettings::reference(Utc::now()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        settings: &DiscountCleanupSettings,
    ) -> Result<DiscountCleanupSummary, DomainError> {
        settings.validate()?;

        let detached_owners = self.detach_stale_owners(settings).await?;
        let discounted_cars = self.apply_discount(settings).await?;

        info!(
            reference_date = %settings.reference_date,
            detached_matched = detached_owners.result.matched_count,
            detached_modified = detached_owners.result.modified_count,
            discounted_matched = discounted_cars.result.matched_count,
            discounted_modified = discounted_cars.result.modified_count,
            "Discount and cleanup completed"
        );

        Ok(DiscountCleanupSummary {
            settings: *settings,
            detached_owners,
            discounted_cars,
        })
    }

    async fn detach_stale_owners(
        &self,
        settings: &DiscountCleanupSettings,
    ) -> Result<DetachOwnersResult, DomainError> {
        let filter = settings.stale_filter();

        let cars_before_detach = self.car_repo.find_by_registration_date(&filter).await?;
        let result = self.car_repo.detach_owners(&filter).await?;

        info!(
            boundary = ?filter.less_than,
            matched = result.matched_count,
            modified = result.modified_count,
            "Owners detached from stale cars"
        );

        Ok(DetachOwnersResult {
            cars_before_detach,
            result,
        })
    }

    async fn apply_discount(
        &self,
        settings: &DiscountCleanupSettings,
    ) -> Result<ApplyDiscountResult, DomainError> {
        let filter = settings.discount_filter();
        let factor = settings.discount_factor();

        let cars_before_update = self.car_repo.find_by_registration_date(&filter).await?;
        let result = self.car_repo.apply_price_factor(&filter, factor).await?;
        let cars_after_update = self.car_repo.find_by_registration_date(&filter).await?;

        info!(
            window_start = ?filter.greater_than_or_equal,
            window_end = ?filter.less_than_or_equal,
            factor,
            matched = result.matched_count,
            modified = result.modified_count,
            "Discount applied"
        );

        Ok(ApplyDiscountResult {
            cars_before_update,
            cars_after_update,
            result,
        })
    }
}
