mod config;
pub use config::{LogConfig, LogFormat, LogLevel};

mod error;
pub use error::LogError;

mod init;

/// Initializes the global tracing subscriber with the given configuration.
///
/// Once installed, all `tracing` macros (`info!`, `debug!`, ...) go through
/// this configuration. Calling it twice returns
/// [`LogError::AlreadyInitialized`].
pub fn init_logger(cfg: &LogConfig) -> Result<(), LogError> {
    match cfg.format {
        LogFormat::Text => init::init_text(cfg),
        LogFormat::Json => init::init_json(cfg),
        LogFormat::Journald => init::init_journald(cfg),
    }
}
