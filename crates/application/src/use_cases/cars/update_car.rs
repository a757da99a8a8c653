use super::owners::ensure_owners_exist;
use crate::ports::{CarRepository, ManufacturerRepository, OwnerRepository};
use chrono::{DateTime, Utc};
use motorpool_domain::{Car, CarUpdate, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct UpdateCarUseCase {
    repo: Arc<dyn CarRepository>,
    manufacturer_repo: Arc<dyn ManufacturerRepository>,
    owner_repo: Arc<dyn OwnerRepository>,
}

impl UpdateCarUseCase {
    pub fn new(
        repo: Arc<dyn CarRepository>,
        manufacturer_repo: Arc<dyn ManufacturerRepository>,
        owner_repo: Arc<dyn OwnerRepository>,
    ) -> Self {
        Self {
            repo,
            manufacturer_repo,
            owner_repo,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        manufacturer_siret: Option<i64>,
        price: Option<f64>,
        first_registration_date: Option<DateTime<Utc>>,
        owner_ids: Option<Vec<i64>>,
    ) -> Result<Car, DomainError> {
        let current = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::CarNotFound(id))?;

        if let Some(p) = price {
            Car::validate_price(p).map_err(DomainError::InvalidCar)?;
        }
        if let Some(date) = first_registration_date {
            Car::validate_registration_date(date).map_err(DomainError::InvalidCar)?;
        }

        let manufacturer_id = match manufacturer_siret {
            Some(siret) => self
                .manufacturer_repo
                .get_by_siret(siret)
                .await?
                .ok_or(DomainError::ManufacturerNotFound(siret))?
                .id,
            None => None,
        };

        if let Some(ref ids) = owner_ids {
            ensure_owners_exist(self.owner_repo.as_ref(), ids).await?;
        }

        let update = CarUpdate {
            manufacturer_id,
            price,
            first_registration_date,
            owner_ids,
        };

        if update.is_empty() {
            return Ok(current);
        }

        let updated = self.repo.update(id, update).await?;

        info!(
            car_id = id,
            price = updated.price,
            owners = updated.owners.len(),
            "Car updated successfully"
        );

        Ok(updated)
    }
}
