use time::format_description::well_known::Rfc3339;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt, fmt::time::UtcTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::LogConfig;
use crate::error::{LogError, LogResult};

fn timer() -> UtcTime<Rfc3339> {
    UtcTime::new(Rfc3339)
}

/// Installs a text subscriber.
pub(crate) fn init_text(cfg: &LogConfig) -> LogResult<()> {
    let fmt_layer = fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(timer());

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    install(subscriber)
}

/// Installs a JSON subscriber.
pub(crate) fn init_json(cfg: &LogConfig) -> LogResult<()> {
    let fmt_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(timer());

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    install(subscriber)
}

/// Installs a journald subscriber (Linux only).
#[cfg(target_os = "linux")]
pub(crate) fn init_journald(cfg: &LogConfig) -> LogResult<()> {
    let journald =
        tracing_journald::layer().map_err(|e| LogError::JournaldInitFailed(e.to_string()))?;

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(journald);
    install(subscriber)
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn init_journald(_cfg: &LogConfig) -> LogResult<()> {
    Err(LogError::JournaldNotSupported)
}

fn install<S>(subscriber: S) -> LogResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(|_| LogError::AlreadyInitialized)
}
