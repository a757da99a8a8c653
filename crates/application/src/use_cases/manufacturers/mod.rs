pub mod create_manufacturer;
pub mod get_manufacturers;

pub use create_manufacturer::CreateManufacturerUseCase;
pub use get_manufacturers::GetManufacturersUseCase;
