pub mod apply_discount_and_cleanup;

pub use apply_discount_and_cleanup::ApplyDiscountAndCleanupUseCase;
