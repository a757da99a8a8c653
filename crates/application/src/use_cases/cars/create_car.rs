use super::owners::ensure_owners_exist;
use crate::ports::{CarRepository, ManufacturerRepository, OwnerRepository};
use chrono::{DateTime, Utc};
use motorpool_domain::{Car, DomainError, NewCar};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct CreateCarUseCase {
    repo: Arc<dyn CarRepository>,
    manufacturer_repo: Arc<dyn ManufacturerRepository>,
    owner_repo: Arc<dyn OwnerRepository>,
}

impl CreateCarUseCase {
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
        manufacturer_siret: i64,
        price: f64,
        first_registration_date: DateTime<Utc>,
        owner_ids: Vec<i64>,
    ) -> Result<Car, DomainError> {
        Car::validate_price(price).map_err(DomainError::InvalidCar)?;
        Car::validate_registration_date(first_registration_date)
            .map_err(DomainError::InvalidCar)?;

        let manufacturer = self
            .manufacturer_repo
            .get_by_siret(manufacturer_siret)
            .await?
            .ok_or(DomainError::ManufacturerNotFound(manufacturer_siret))?;
        let manufacturer_id = manufacturer.id.ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "Manufacturer with SIRET {} has no id",
                manufacturer_siret
            ))
        })?;

        ensure_owners_exist(self.owner_repo.as_ref(), &owner_ids).await?;

        let car = self
            .repo
            .create(NewCar {
                manufacturer_id,
                price,
                first_registration_date,
                owner_ids,
            })
            .await?;

        info!(
            car_id = ?car.id,
            siret = manufacturer_siret,
            price,
            owners = car.owners.len(),
            "Car created successfully"
        );

        Ok(car)
    }
}
