use std::fs;

use comfort_monitor::core::comfort::{SensorReader, ThresholdRange};
use comfort_monitor::{MonitorConfig, PollingScheduler, SensorMode};
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = MonitorConfig::default();
    assert_eq!(config.mode, SensorMode::Live);
    assert_eq!(config.poll_interval_secs, 5);
    assert_eq!(config.thresholds.temperature, ThresholdRange::new(20.0, 26.0));
    assert!(config.device_id.is_none());
}

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("comfort.toml");
    fs::write(
        &path,
        r#"
broker_url = "http://20.63.91.180:1026"
device_id = "EnvSensor:comfort001"
poll_interval_secs = 10

[thresholds.humidity]
min = 35.0
max = 65.0
"#,
    )
    .unwrap();

    let config = MonitorConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.broker_url, "http://20.63.91.180:1026");
    assert_eq!(config.device_id.as_deref(), Some("EnvSensor:comfort001"));
    assert_eq!(config.poll_interval_secs, 10);
    assert_eq!(config.thresholds.humidity, ThresholdRange::new(35.0, 65.0));
    assert_eq!(config.thresholds.luminosity, ThresholdRange::new(30.0, 80.0));
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = MonitorConfig::load(Some(temp_dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_malformed_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "poll_interval_secs = \"soon\"").unwrap();

    let err = MonitorConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_scheduler_refuses_to_start_without_device() {
    let result = PollingScheduler::start(&MonitorConfig::default());
    let err = result.err().expect("live mode without device_id must not start");
    assert!(err.is_config());
}

#[test]
fn test_scheduler_refuses_inverted_thresholds() {
    let mut config = MonitorConfig {
        mode: SensorMode::Synthetic,
        ..Default::default()
    };
    config.thresholds.temperature = ThresholdRange::new(30.0, 20.0);
    assert!(PollingScheduler::start(&config).is_err());
}

#[test]
fn test_reader_follows_mode() {
    let synthetic = MonitorConfig {
        mode: SensorMode::Synthetic,
        seed: Some(1),
        ..Default::default()
    };
    assert!(matches!(
        SensorReader::from_config(&synthetic).unwrap(),
        SensorReader::Synthetic(_)
    ));

    let live = MonitorConfig {
        device_id: Some("EnvSensor:comfort001".to_string()),
        ..Default::default()
    };
    let reader = SensorReader::from_config(&live).unwrap();
    assert!(matches!(reader, SensorReader::Live(_)));
    assert!(reader.describe().contains("/v2/entities/EnvSensor:comfort001"));
}
