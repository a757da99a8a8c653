use super::Repositories;
use motorpool_application::use_cases::{
    ApplyDiscountAndCleanupUseCase, CreateCarUseCase, CreateManufacturerUseCase,
    CreateOwnerUseCase, DeleteCarUseCase, GetCarsUseCase, GetManufacturersUseCase,
    GetOwnersUseCase, UpdateCarUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub discount_cleanup: Arc<ApplyDiscountAndCleanupUseCase>,
    pub get_cars: Arc<GetCarsUseCase>,
    pub create_car: Arc<CreateCarUseCase>,
    pub update_car: Arc<UpdateCarUseCase>,
    pub delete_car: Arc<DeleteCarUseCase>,
    pub get_manufacturers: Arc<GetManufacturersUseCase>,
    pub create_manufacturer: Arc<CreateManufacturerUseCase>,
    pub get_owners: Arc<GetOwnersUseCase>,
    pub create_owner: Arc<CreateOwnerUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            discount_cleanup: Arc::new(ApplyDiscountAndCleanupUseCase::new(repos.car.clone())),
            get_cars: Arc::new(GetCarsUseCase::new(repos.car.clone())),
            create_car: Arc::new(CreateCarUseCase::new(
                repos.car.clone(),
                repos.manufacturer.clone(),
                repos.owner.clone(),
            )),
            update_car: Arc::new(UpdateCarUseCase::new(
                repos.car.clone(),
                repos.manufacturer.clone(),
                repos.owner.clone(),
            )),
            delete_car: Arc::new(DeleteCarUseCase::new(repos.car.clone())),
            get_manufacturers: Arc::new(GetManufacturersUseCase::new(
                repos.manufacturer.clone(),
            )),
            create_manufacturer: Arc::new(CreateManufacturerUseCase::new(
                repos.manufacturer.clone(),
            )),
            get_owners: Arc::new(GetOwnersUseCase::new(repos.owner.clone())),
            create_owner: Arc::new(CreateOwnerUseCase::new(repos.owner.clone())),
        }
    }
}
