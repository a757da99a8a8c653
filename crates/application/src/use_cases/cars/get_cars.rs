use crate::ports::CarRepository;
use motorpool_domain::{Car, DomainError, Manufacturer};
use std::sync::Arc;
use tracing::instrument;

pub struct GetCarsUseCase {
    repo: Arc<dyn CarRepository>,
}

impl GetCarsUseCase {
    pub fn new(repo: Arc<dyn CarRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Car>, DomainError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Car, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::CarNotFound(id))
    }

    pub async fn get_manufacturer(&self, car_id: i64) -> Result<Manufacturer, DomainError> {
        Ok(self.get_by_id(car_id).await?.manufacturer)
    }
}
