use crate::error::LoggerError;
use crate::{LevelFilter, Rotation};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Sink settings collected by the builder.
#[derive(Debug)]
pub(crate) struct Sinks {
    pub(crate) console: bool,
    pub(crate) directory: Option<PathBuf>,
    pub(crate) level: LevelFilter,
    pub(crate) directives: Option<String>,
    pub(crate) rotation: Rotation,
    pub(crate) max_files: usize,
    pub(crate) json: bool,
}

impl Default for Sinks {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            directives: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

impl Sinks {
    fn validate(&self, name: &str) -> Result<(), LoggerError> {
        let problem = if name.trim().is_empty() {
            "Logger name cannot be empty"
        } else if self.max_files == 0 {
            "max_files must be greater than zero"
        } else if !self.console && self.directory.is_none() {
            "No logging layers enabled. Enable console or file output."
        } else {
            return Ok(());
        };
        Err(LoggerError::InvalidConfiguration { message: problem.into(), context: None })
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid env filter '{directives}': {e}").into(),
                    context: None,
                })
            }
        }
    }
}

/// Builds the enabled layers and installs them as the global subscriber.
pub(crate) fn install(name: &str, sinks: Sinks) -> Result<Option<WorkerGuard>, LoggerError> {
    sinks.validate(name)?;
    let filter = sinks.filter()?;

    let mut layers: Vec<BoxedLayer<_>> = Vec::new();
    if sinks.console {
        layers.push(fmt::layer().compact().with_writer(std::io::stderr).boxed());
    }

    let guard = match &sinks.directory {
        Some(directory) => {
            let (layer, guard) = file_layer(name, directory, &sinks)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(filter).with(layers).try_init()?;
    Ok(guard)
}

fn file_layer<S>(
    name: &str,
    directory: &Path,
    sinks: &Sinks,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(sinks.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(sinks.max_files)
        .build(directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if sinks.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let err = Sinks::default().validate("  ").expect_err("blank name");
        assert!(err.to_string().contains("Logger name cannot be empty"));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let sinks = Sinks { max_files: 0, ..Sinks::default() };
        assert!(sinks.validate("depot").is_err());
    }

    #[test]
    fn at_least_one_sink_is_required() {
        let sinks = Sinks { console: false, ..Sinks::default() };
        assert!(matches!(sinks.validate("depot"), Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn malformed_directives_are_rejected() {
        let sinks =
            Sinks { directives: Some("depot_warehouse=loud".to_owned()), ..Sinks::default() };
        assert!(matches!(sinks.filter(), Err(LoggerError::InvalidConfiguration { .. })));
    }
}
