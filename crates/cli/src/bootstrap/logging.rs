use motorpool_domain::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries command output only. `RUST_LOG` wins
/// over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
