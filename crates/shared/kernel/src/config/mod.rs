use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "depot";

/// Prefix of environment overrides (`DEPOT__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "DEPOT";

#[depot_derive::depot_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl ConfigError {
    /// `true` when the base file does not exist. A file that exists but fails to parse or
    /// deserialize is not missing.
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        let Self::Config { source: config::ConfigError::Foreign(cause), .. } = self else {
            return false;
        };
        cause.downcast_ref::<io::Error>().is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }
}

/// Loads configuration by layering environment overrides on top of a file.
///
/// 1. **Base file**: `path`, or `depot` in the working directory (any format `config`
///    recognizes by extension: `depot.toml`, `depot.json`, ...).
/// 2. **Environment**: variables prefixed with `DEPOT__`; nested keys are separated by
///    `__` (`DEPOT__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use depot_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     verbose: bool,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
