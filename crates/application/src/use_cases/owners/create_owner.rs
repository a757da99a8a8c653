use crate::ports::OwnerRepository;
use chrono::{DateTime, Utc};
use motorpool_domain::{DomainError, Owner};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct CreateOwnerUseCase {
    repo: Arc<dyn OwnerRepository>,
}

impl CreateOwnerUseCase {
    pub fn new(repo: Arc<dyn OwnerRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        name: String,
        purchase_date: DateTime<Utc>,
    ) -> Result<Owner, DomainError> {
        Owner::validate_purchase_date(purchase_date).map_err(DomainError::InvalidOwner)?;

        let owner = self.repo.create(name, purchase_date).await?;
        info!(owner_id = ?owner.id, name = %owner.name, "Owner created successfully");
        Ok(owner)
    }
}
