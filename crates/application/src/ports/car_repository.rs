use async_trait::async_trait;
use motorpool_domain::{Car, CarUpdate, DomainError, NewCar, RegistrationDateFilter, WriteOutcome};

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, car: NewCar) -> Result<Car, DomainError>;

    /// Get a car with manufacturer and owners expanded
    async fn get_by_id(&self, id: i64) -> Result<Option<Car>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Car>, DomainError>;

    async fn update(&self, id: i64, update: CarUpdate) -> Result<Car, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Cars whose first registration date satisfies `filter`, relations
    /// expanded, ordered by registration date then id
    async fn find_by_registration_date(
        &self,
        filter: &RegistrationDateFilter,
    ) -> Result<Vec<Car>, DomainError>;

    /// Multiply the price of every matching car by `factor` in one operation
    async fn apply_price_factor(
        &self,
        filter: &RegistrationDateFilter,
        factor: f64,
    ) -> Result<WriteOutcome, DomainError>;

    /// Clear the owner list of every matching car in one operation
    async fn detach_owners(
        &self,
        filter: &RegistrationDateFilter,
    ) -> Result<WriteOutcome, DomainError>;
}
