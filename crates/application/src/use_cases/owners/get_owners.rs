use crate::ports::OwnerRepository;
use motorpool_domain::{DomainError, Owner};
use std::sync::Arc;

pub struct GetOwnersUseCase {
    repo: Arc<dyn OwnerRepository>,
}

impl GetOwnersUseCase {
    pub fn new(repo: Arc<dyn OwnerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Owner>, DomainError> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Owner, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::OwnerNotFound(id))
    }
}
