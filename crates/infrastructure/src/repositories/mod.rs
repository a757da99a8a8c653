pub mod car_repository;
pub mod manufacturer_repository;
pub mod owner_repository;
mod timestamps;

pub use car_repository::SqliteCarRepository;
pub use manufacturer_repository::SqliteManufacturerRepository;
pub use owner_repository::SqliteOwnerRepository;
