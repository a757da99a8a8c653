#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use motorpool_application::ports::{CarRepository, ManufacturerRepository, OwnerRepository};
use motorpool_domain::{
    Car, CarUpdate, DomainError, Manufacturer, NewCar, Owner, RegistrationDateFilter,
    WriteOutcome,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Find,
    ApplyPriceFactor,
    DetachOwners,
}

pub struct MockCarRepository {
    cars: Arc<RwLock<Vec<Car>>>,
    manufacturers: Arc<RwLock<HashMap<i64, Manufacturer>>>,
    owners: Arc<RwLock<HashMap<i64, Owner>>>,
    next_id: Arc<RwLock<i64>>,
    fail_on: Arc<RwLock<Option<FailPoint>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockCarRepository {
    pub fn new() -> Self {
        Self {
            cars: Arc::new(RwLock::new(Vec::new())),
            manufacturers: Arc::new(RwLock::new(HashMap::new())),
            owners: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            fail_on: Arc::new(RwLock::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn with_cars(cars: Vec<Car>) -> Self {
        let repo = Self::new();
        let mut max_id = 0i64;
        {
            let mut stored = repo.cars.write().await;
            let mut manufacturers = repo.manufacturers.write().await;
            let mut owners = repo.owners.write().await;
            for mut car in cars {
                let id = car.id.unwrap_or(max_id + 1);
                car.id = Some(id);
                max_id = max_id.max(id);
                if let Some(mid) = car.manufacturer.id {
                    manufacturers.insert(mid, car.manufacturer.clone());
                }
                for owner in &car.owners {
                    if let Some(oid) = owner.id {
                        owners.insert(oid, owner.clone());
                    }
                }
                stored.push(car);
            }
        }
        *repo.next_id.write().await = max_id + 1;
        repo
    }

    pub async fn register_manufacturer(&self, manufacturer: Manufacturer) {
        if let Some(id) = manufacturer.id {
            self.manufacturers.write().await.insert(id, manufacturer);
        }
    }

    pub async fn register_owner(&self, owner: Owner) {
        if let Some(id) = owner.id {
            self.owners.write().await.insert(id, owner);
        }
    }

    pub async fn set_fail_on(&self, point: Option<FailPoint>) {
        *self.fail_on.write().await = point;
    }

    pub async fn count(&self) -> usize {
        self.cars.read().await.len()
    }

    pub async fn car(&self, id: i64) -> Option<Car> {
        self.cars
            .read()
            .await
            .iter()
            .find(|c| c.id == Some(id))
            .cloned()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    async fn check_failure(&self, point: FailPoint) -> Result<(), DomainError> {
        if *self.fail_on.read().await == Some(point) {
            return Err(DomainError::DatabaseError(format!(
                "simulated failure at {:?}",
                point
            )));
        }
        Ok(())
    }

    async fn resolve_owners(&self, owner_ids: &[i64]) -> Result<Vec<Owner>, DomainError> {
        let owners = self.owners.read().await;
        owner_ids
            .iter()
            .map(|id| {
                owners
                    .get(id)
                    .cloned()
                    .ok_or_else(|| DomainError::DatabaseError(format!("unknown owner {}", id)))
            })
            .collect()
    }

    async fn resolve_manufacturer(&self, id: i64) -> Result<Manufacturer, DomainError> {
        self.manufacturers
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::DatabaseError(format!("unknown manufacturer {}", id)))
    }
}

fn sorted_by_registration(mut cars: Vec<Car>) -> Vec<Car> {
    cars.sort_by(|a, b| {
        a.first_registration_date
            .cmp(&b.first_registration_date)
            .then(a.id.cmp(&b.id))
    });
    cars
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn create(&self, car: NewCar) -> Result<Car, DomainError> {
        self.record("create");
        let manufacturer = self.resolve_manufacturer(car.manufacturer_id).await?;
        let owners = self.resolve_owners(&car.owner_ids).await?;

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let created = Car {
            id: Some(id),
            manufacturer,
            price: car.price,
            first_registration_date: car.first_registration_date,
            owners,
        };
        self.cars.write().await.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Car>, DomainError> {
        self.record("get_by_id");
        Ok(self.car(id).await)
    }

    async fn get_all(&self) -> Result<Vec<Car>, DomainError> {
        self.record("get_all");
        let mut cars = self.cars.read().await.clone();
        cars.sort_by_key(|c| c.id);
        Ok(cars)
    }

    async fn update(&self, id: i64, update: CarUpdate) -> Result<Car, DomainError> {
        self.record("update");
        let manufacturer = match update.manufacturer_id {
            Some(mid) => Some(self.resolve_manufacturer(mid).await?),
            None => None,
        };
        let owners = match update.owner_ids {
            Some(ref ids) => Some(self.resolve_owners(ids).await?),
            None => None,
        };

        let mut cars = self.cars.write().await;
        let car = cars
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or(DomainError::CarNotFound(id))?;

        if let Some(m) = manufacturer {
            car.manufacturer = m;
        }
        if let Some(price) = update.price {
            car.price = price;
        }
        if let Some(date) = update.first_registration_date {
            car.first_registration_date = date;
        }
        if let Some(o) = owners {
            car.owners = o;
        }
        Ok(car.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.record("delete");
        let mut cars = self.cars.write().await;
        let before = cars.len();
        cars.retain(|c| c.id != Some(id));
        if cars.len() == before {
            return Err(DomainError::CarNotFound(id));
        }
        Ok(())
    }

    async fn find_by_registration_date(
        &self,
        filter: &RegistrationDateFilter,
    ) -> Result<Vec<Car>, DomainError> {
        self.record("find_by_registration_date");
        self.check_failure(FailPoint::Find).await?;
        let matching = self
            .cars
            .read()
            .await
            .iter()
            .filter(|c| filter.matches(c.first_registration_date))
            .cloned()
            .collect();
        Ok(sorted_by_registration(matching))
    }

    async fn apply_price_factor(
        &self,
        filter: &RegistrationDateFilter,
        factor: f64,
    ) -> Result<WriteOutcome, DomainError> {
        self.record("apply_price_factor");
        self.check_failure(FailPoint::ApplyPriceFactor).await?;
        let mut outcome = WriteOutcome::default();
        for car in self.cars.write().await.iter_mut() {
            if filter.matches(car.first_registration_date) {
                outcome.matched_count += 1;
                let discounted = car.price * factor;
                if discounted != car.price {
                    car.price = discounted;
                    outcome.modified_count += 1;
                }
            }
        }
        Ok(outcome)
    }

    async fn detach_owners(
        &self,
        filter: &RegistrationDateFilter,
    ) -> Result<WriteOutcome, DomainError> {
        self.record("detach_owners");
        self.check_failure(FailPoint::DetachOwners).await?;
        let mut outcome = WriteOutcome::default();
        for car in self.cars.write().await.iter_mut() {
            if filter.matches(car.first_registration_date) {
                outcome.matched_count += 1;
                if !car.owners.is_empty() {
                    car.owners.clear();
                    outcome.modified_count += 1;
                }
            }
        }
        Ok(outcome)
    }
}

pub struct MockManufacturerRepository {
    manufacturers: Arc<RwLock<Vec<Manufacturer>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockManufacturerRepository {
    pub fn new() -> Self {
        Self {
            manufacturers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn with_manufacturers(manufacturers: Vec<Manufacturer>) -> Self {
        let repo = Self::new();
        let max_id = manufacturers.iter().filter_map(|m| m.id).max().unwrap_or(0);
        *repo.manufacturers.write().await = manufacturers;
        *repo.next_id.write().await = max_id + 1;
        repo
    }
}

#[async_trait]
impl ManufacturerRepository for MockManufacturerRepository {
    async fn create(
        &self,
        name: String,
        siret: i64,
        phone: String,
    ) -> Result<Manufacturer, DomainError> {
        let mut manufacturers = self.manufacturers.write().await;
        if manufacturers.iter().any(|m| m.siret == siret) {
            return Err(DomainError::ManufacturerConflict(siret));
        }

        let mut next_id = self.next_id.write().await;
        let mut manufacturer = Manufacturer::new(&name, siret, &phone);
        manufacturer.id = Some(*next_id);
        *next_id += 1;

        manufacturers.push(manufacturer.clone());
        Ok(manufacturer)
    }

    async fn get_by_siret(&self, siret: i64) -> Result<Option<Manufacturer>, DomainError> {
        Ok(self
            .manufacturers
            .read()
            .await
            .iter()
            .find(|m| m.siret == siret)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Manufacturer>, DomainError> {
        Ok(self.manufacturers.read().await.clone())
    }
}

pub struct MockOwnerRepository {
    owners: Arc<RwLock<Vec<Owner>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockOwnerRepository {
    pub fn new() -> Self {
        Self {
            owners: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn with_owners(owners: Vec<Owner>) -> Self {
        let repo = Self::new();
        let max_id = owners.iter().filter_map(|o| o.id).max().unwrap_or(0);
        *repo.owners.write().await = owners;
        *repo.next_id.write().await = max_id + 1;
        repo
    }
}

#[async_trait]
impl OwnerRepository for MockOwnerRepository {
    async fn create(
        &self,
        name: String,
        purchase_date: DateTime<Utc>,
    ) -> Result<Owner, DomainError> {
        let mut next_id = self.next_id.write().await;
        let mut owner = Owner::new(&name, purchase_date);
        owner.id = Some(*next_id);
        *next_id += 1;

        self.owners.write().await.push(owner.clone());
        Ok(owner)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Owner>, DomainError> {
        Ok(self
            .owners
            .read()
            .await
            .iter()
            .find(|o| o.id == Some(id))
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Owner>, DomainError> {
        Ok(self.owners.read().await.clone())
    }
}
