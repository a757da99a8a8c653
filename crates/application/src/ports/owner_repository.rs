use async_trait::async_trait;
use chrono::{DateTime, Utc};
use motorpool_domain::{DomainError, Owner};

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn create(&self, name: String, purchase_date: DateTime<Utc>)
        -> Result<Owner, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Owner>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Owner>, DomainError>;
}
