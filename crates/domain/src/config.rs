pub mod database;
pub mod errors;
pub mod logging;
pub mod maintenance;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use maintenance::MaintenanceConfig;
pub use root::{CliOverrides, Config};
