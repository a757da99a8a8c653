pub mod create_car;
pub mod delete_car;
pub mod get_cars;
mod owners;
pub mod update_car;

pub use create_car::CreateCarUseCase;
pub use delete_car::DeleteCarUseCase;
pub use get_cars::GetCarsUseCase;
pub use update_car::UpdateCarUseCase;
