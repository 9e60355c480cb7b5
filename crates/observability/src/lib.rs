//! Tracing and logging setup shared by the binaries.

/// Observability configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}

/// Like [`init`], but with `default_format` when `KONTENER_LOG_FORMAT` is unset.
pub fn init_with_default_format(default_format: LogFormat) {
    tracing::init(&ObservabilityConfig::from_env_or(default_format));
}
