use crate::ports::ManufacturerRepository;
use motorpool_domain::{DomainError, Manufacturer};
use std::sync::Arc;

pub struct GetManufacturersUseCase {
    repo: Arc<dyn ManufacturerRepository>,
}

impl GetManufacturersUseCase {
    pub fn new(repo: Arc<dyn ManufacturerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Manufacturer>, DomainError> {
        self.repo.get_all().await
    }

    pub async fn get_by_siret(&self, siret: i64) -> Result<Manufacturer, DomainError> {
        self.repo
            .get_by_siret(siret)
            .await?
            .ok_or(DomainError::ManufacturerNotFound(siret))
    }
}
