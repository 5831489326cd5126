use depot_domain::config::LoggingConfig;
use depot_logger::{Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn unknown_level_is_rejected_before_init() {
    let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };

    let err = Logger::from_config("depot", &config).expect_err("invalid level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
#[serial]
fn all_sinks_disabled_is_rejected() {
    let config = LoggingConfig { console: false, ..LoggingConfig::default() };

    let err = Logger::from_config("depot", &config).expect_err("no layers");
    assert!(err.to_string().contains("No logging layers enabled"));
}

#[test]
#[serial]
fn json_file_sink_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let config = LoggingConfig {
        level: "debug".to_owned(),
        console: false,
        directory: Some(tmp_dir.path().to_path_buf()),
        json: true,
        filter: None,
        max_files: 3,
    };

    let logger = Logger::from_config("depot-json", &config)?;
    assert!(logger.guard().is_some());

    tracing::debug!(stored = 1, "Delivery processed");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(tmp_dir.path())?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let line = fs::read_to_string(log_file)?;
    assert!(line.trim_start().starts_with('{'), "json lines expected: {line}");
    assert!(line.contains("Delivery processed"));
    Ok(())
}
