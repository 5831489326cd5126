//! # Logger
//!
//! Installs the global `tracing` subscriber for Depot binaries.
//!
//! Two sinks are available: a compact console layer on **stderr** (stdout is reserved for
//! the JSON documents the shell prints) and a rolling, non-blocking file layer that can
//! emit JSON lines. `RUST_LOG` is honoured unless an explicit filter is given.
//!
//! ```rust
//! # use depot_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("depot")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```
//!
//! Binaries normally go through [`Logger::from_config`] with the `[logging]` section of
//! their configuration.

mod builder;
mod error;
mod layers;

pub use crate::builder::{ConsoleOnly, LoggerBuilder, Named, Unnamed, WithFiles};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use depot_domain::config::LoggingConfig;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed subscriber.
///
/// Holds the file writer's [`WorkerGuard`]; keep it alive until shutdown so buffered
/// lines reach the disk.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a [`LoggerBuilder`]. The name prefixes rolling files (`depot.2026-10-15.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Installs the subscriber described by a `[logging]` section.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an unknown level name or filter, or when
    ///   both the console and the file sink are disabled.
    /// * Anything [`LoggerBuilder::init`] reports.
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let mut builder = Self::builder().name(name).console(config.console).level(level);
        if let Some(filter) = &config.filter {
            builder = builder.env_filter(filter);
        }

        let Some(directory) = &config.directory else {
            return builder.init();
        };
        let builder = builder.path(directory).max_files(config.max_files);
        if config.json { builder.json().init() } else { builder.init() }
    }

    pub(crate) fn with_guard(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing file logs");
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}
