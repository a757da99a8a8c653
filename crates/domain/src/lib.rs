//! Motorpool Domain Layer
pub mod car;
pub mod config;
pub mod errors;
pub mod maintenance;
pub mod manufacturer;
pub mod owner;
pub mod registration_window;

pub use car::{Car, CarUpdate, NewCar};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use maintenance::{
    ApplyDiscountResult, DetachOwnersResult, DiscountCleanupSettings, DiscountCleanupSummary,
    WriteOutcome,
};
pub use manufacturer::Manufacturer;
pub use owner::Owner;
pub use registration_window::RegistrationDateFilter;
