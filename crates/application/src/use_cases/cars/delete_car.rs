use crate::ports::CarRepository;
use motorpool_domain::{Car, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct DeleteCarUseCase {
    repo: Arc<dyn CarRepository>,
}

impl DeleteCarUseCase {
    pub fn new(repo: Arc<dyn CarRepository>) -> Self {
        Self { repo }
    }

    /// Returns the car as it was before deletion
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<Car, DomainError> {
        let car = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::CarNotFound(id))?;

        self.repo.delete(id).await?;

        info!(car_id = id, "Car deleted successfully");

        Ok(car)
    }
}
