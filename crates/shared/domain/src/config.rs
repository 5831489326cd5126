use crate::kind::DepartmentKind;
use serde::Deserialize;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Top-level configuration for the `depot` binary and [`DepotConfig`] consumers.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DepotConfig {
    pub logging: LoggingConfig,
    pub departments: DepartmentsConfig,
}

/// Logging sinks and verbosity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when absent.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
    /// Extra env-filter directives, e.g. `depot_warehouse=debug`.
    pub filter: Option<String>,
    pub max_files: usize,
}

/// Ordered department layout. Order is routing priority.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DepartmentsConfig(pub Vec<DepartmentConfig>);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepartmentConfig {
    pub kind: DepartmentKind,
    pub max_occupancy: f64,
}

// --- Default ---

/// Capacity given to each department of the default layout.
pub const DEFAULT_MAX_OCCUPANCY: f64 = 1000.0;

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            directory: None,
            json: false,
            filter: None,
            max_files: 10,
        }
    }
}

impl Default for DepartmentsConfig {
    fn default() -> Self {
        Self(
            DepartmentKind::iter()
                .map(|kind| DepartmentConfig { kind, max_occupancy: DEFAULT_MAX_OCCUPANCY })
                .collect(),
        )
    }
}

impl DepartmentsConfig {
    pub fn iter(&self) -> impl Iterator<Item = &DepartmentConfig> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
