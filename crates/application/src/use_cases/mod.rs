pub mod cars;
pub mod maintenance;
pub mod manufacturers;
pub mod owners;

pub use cars::{CreateCarUseCase, DeleteCarUseCase, GetCarsUseCase, UpdateCarUseCase};
pub use maintenance::ApplyDiscountAndCleanupUseCase;
pub use manufacturers::{CreateManufacturerUseCase, GetManufacturersUseCase};
pub use owners::{CreateOwnerUseCase, GetOwnersUseCase};
