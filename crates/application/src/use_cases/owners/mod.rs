pub mod create_owner;
pub mod get_owners;

pub use create_owner::CreateOwnerUseCase;
pub use get_owners::GetOwnersUseCase;
