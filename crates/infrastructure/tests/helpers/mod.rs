#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use motorpool_application::ports::{CarRepository, ManufacturerRepository, OwnerRepository};
use motorpool_domain::{Car, Manufacturer, NewCar, Owner};
use motorpool_infrastructure::database::run_migrations;
use motorpool_infrastructure::repositories::{
    SqliteCarRepository, SqliteManufacturerRepository, SqliteOwnerRepository,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Single-connection in-memory database; every extra connection would see
/// its own empty database.
pub async fn create_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub fn at_millis(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap() + chrono::TimeDelta::milliseconds(ms as i64)
}

pub struct Fleet {
    pub pool: SqlitePool,
    pub cars: SqliteCarRepository,
    pub manufacturers: SqliteManufacturerRepository,
    pub owners: SqliteOwnerRepository,
    pub manufacturer: Manufacturer,
}

impl Fleet {
    pub async fn new() -> Self {
        let pool = create_test_db().await;
        let manufacturers = SqliteManufacturerRepository::new(pool.clone());
        let manufacturer = manufacturers
            .create("Renault".to_string(), 552_100_554, "0102030405".to_string())
            .await
            .unwrap();

        Self {
            cars: SqliteCarRepository::new(pool.clone()),
            owners: SqliteOwnerRepository::new(pool.clone()),
            manufacturers,
            manufacturer,
            pool,
        }
    }

    pub async fn owner(&self, name: &str) -> Owner {
        self.owners
            .create(name.to_string(), utc(2022, 3, 1))
            .await
            .unwrap()
    }

    pub async fn car(
        &self,
        price: f64,
        registered: DateTime<Utc>,
        owners: &[&Owner],
    ) -> Car {
        self.cars
            .create(NewCar {
                manufacturer_id: self.manufacturer.id.unwrap(),
                price,
                first_registration_date: registered,
                owner_ids: owners.iter().filter_map(|o| o.id).collect(),
            })
            .await
            .unwrap()
    }

    pub async fn link_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM car_owners")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        count
    }
}
