//! Typestate builder: a name is required before `init`, file-only knobs need a directory.

use crate::error::LoggerError;
use crate::layers::{self, Sinks};
use crate::{LevelFilter, Logger, Rotation};
use std::marker::PhantomData;
use std::path::PathBuf;

/// No name given yet.
#[derive(Debug, Default)]
pub struct Unnamed;
/// Named; may be initialized.
#[derive(Debug)]
pub struct Named(String);
/// Console only; file options unavailable.
#[derive(Debug, Default)]
pub struct ConsoleOnly;
/// A log directory is set.
#[derive(Debug)]
pub struct WithFiles;

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFiles {}

/// Configures and installs the global subscriber. See [`Logger::builder`].
#[derive(Debug, Default)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    sinks: Sinks,
    name: N,
    files: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the logger; also the rolling file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { sinks: self.sinks, name: Named(name.into()), files: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.sinks.level = level;
        self
    }

    /// Explicit filter directives (`depot_warehouse=debug`); replaces `RUST_LOG`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.sinks.directives = Some(directives.into());
        self
    }

    /// Toggles the stderr layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.sinks.console = enabled;
        self
    }

    /// Adds the rolling file layer writing into `directory`.
    pub fn path(mut self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFiles> {
        self.sinks.directory = Some(directory.into());
        LoggerBuilder { sinks: self.sinks, name: self.name, files: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, zero `max_files`, bad
    ///   filter directives or no enabled sink.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        layers::install(&self.name.0, self.sinks).map(Logger::with_guard)
    }
}

impl LoggerBuilder<Named, WithFiles> {
    /// Number of rotated files kept.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.sinks.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.sinks.rotation = rotation;
        self
    }

    /// Writes file logs as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.sinks.json = true;
        self
    }
}
