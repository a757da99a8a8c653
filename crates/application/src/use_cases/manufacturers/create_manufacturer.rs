use crate::ports::ManufacturerRepository;
use motorpool_domain::{DomainError, Manufacturer};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct CreateManufacturerUseCase {
    repo: Arc<dyn ManufacturerRepository>,
}

impl CreateManufacturerUseCase {
    pub fn new(repo: Arc<dyn ManufacturerRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        name: String,
        siret: i64,
        phone: String,
    ) -> Result<Manufacturer, DomainError> {
        if self.repo.get_by_siret(siret).await?.is_some() {
            return Err(DomainError::ManufacturerConflict(siret));
        }

        let manufacturer = self.repo.create(name, siret, phone).await?;

        info!(
            manufacturer_id = ?manufacturer.id,
            siret,
            name = %manufacturer.name,
            "Manufacturer created successfully"
        );

        Ok(manufacturer)
    }
}
