use async_trait::async_trait;
use motorpool_domain::{DomainError, Manufacturer};

#[async_trait]
pub trait ManufacturerRepository: Send + Sync {
    /// Fails with `ManufacturerConflict` when the SIRET is already taken
    async fn create(
        &self,
        name: String,
        siret: i64,
        phone: String,
    ) -> Result<Manufacturer, DomainError>;

    async fn get_by_siret(&self, siret: i64) -> Result<Option<Manufacturer>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Manufacturer>, DomainError>;
}
