//! Playground diagnostics.
//!
//! Two layers:
//! - `init_tracing` installs the process-wide `tracing` subscriber once.
//! - `Logger` is an explicit, cheaply clonable handle carrying the host's
//!   debug-mode flag. Call sites receive it instead of reading global state,
//!   and it drops info/debug/warn output when debug mode is off.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Logger configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Whether the host runs in debug mode
    pub debug_mode: bool,
}

impl Default for LoggerConfig {
    /// Debug mode stays on until the host config is known, so that
    /// start-up messages are not lost.
    fn default() -> Self {
        Self { debug_mode: true }
    }
}

/// Debug-mode aware logger handle
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Logger for the given debug flag
    pub fn with_debug_mode(debug_mode: bool) -> Self {
        Self::new(LoggerConfig { debug_mode })
    }

    pub fn config(&self) -> LoggerConfig {
        self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.debug_mode
    }

    pub fn info(&self, message: impl AsRef<str>) {
        if self.is_enabled() {
            tracing::info!("{}", message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if self.is_enabled() {
            tracing::warn!("{}", message.as_ref());
        }
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        if self.is_enabled() {
            tracing::debug!("{}", message.as_ref());
        }
    }

    pub fn error(&self, message: impl AsRef<str>) {
        if self.is_enabled() {
            tracing::error!("{}", message.as_ref());
        }
    }
}
