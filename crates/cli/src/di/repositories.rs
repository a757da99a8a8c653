use motorpool_infrastructure::repositories::{
    SqliteCarRepository, SqliteManufacturerRepository, SqliteOwnerRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub car: Arc<SqliteCarRepository>,
    pub manufacturer: Arc<SqliteManufacturerRepository>,
    pub owner: Arc<SqliteOwnerRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            car: Arc::new(SqliteCarRepository::new(pool.clone())),
            manufacturer: Arc::new(SqliteManufacturerRepository::new(pool.clone())),
            owner: Arc::new(SqliteOwnerRepository::new(pool)),
        }
    }
}
