use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid maintenance settings: {0}")]
    InvalidMaintenanceSettings(String),

    #[error("Invalid car: {0}")]
    InvalidCar(String),

    #[error("Car not found: {0}")]
    CarNotFound(i64),

    #[error("Manufacturer not found (SIRET {0})")]
    ManufacturerNotFound(i64),

    #[error("Manufacturer with SIRET {0} already exists")]
    ManufacturerConflict(i64),

    #[error("Invalid owner: {0}")]
    InvalidOwner(String),

    #[error("Owner not found: {0}")]
    OwnerNotFound(i64),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
