mod car_repository;
mod manufacturer_repository;
mod owner_repository;

pub use car_repository::CarRepository;
pub use manufacturer_repository::ManufacturerRepository;
pub use owner_repository::OwnerRepository;
