use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::comfort::Thresholds;
use crate::error::{MonitorError, Result};

const CONFIG_FILE_NAME: &str = "comfort-monitor.toml";

/// Where readings come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorMode {
    #[default]
    Live,
    Synthetic,
}

/// Immutable monitor configuration, fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub broker_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Tenant scope (Fiware-Service)
    pub service: String,
    /// Path scope (Fiware-ServicePath)
    pub service_path: String,
    pub mode: SensorMode,
    /// Dropout probability in synthetic mode
    pub p_offline: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub thresholds: Thresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            broker_url: "http://localhost:1026".to_string(),
            device_id: None,
            service: "skillhub".to_string(),
            service_path: "/".to_string(),
            mode: SensorMode::Live,
            p_offline: 0.2,
            seed: None,
            poll_interval_secs: 5,
            request_timeout_secs: 3,
            thresholds: Thresholds::default(),
        }
    }
}

impl MonitorConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the first file found in
    /// [`MonitorConfig::search_paths`] is used, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in Self::search_paths() {
            if path.is_file() {
                log::info!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::info!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MonitorError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// ./comfort-monitor.toml, then <config dir>/comfort-monitor/config.toml
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("comfort-monitor").join("config.toml"));
        }
        paths
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject configurations the service must not start with.
    pub fn validate(&self) -> Result<()> {
        if self.mode == SensorMode::Live {
            match self.device_id.as_deref().map(str::trim) {
                None | Some("") => {
                    return Err(MonitorError::config("device_id is required in live mode"))
                }
                Some(_) => {}
            }

            if !(self.broker_url.starts_with("http://") || self.broker_url.starts_with("https://")) {
                return Err(MonitorError::config(format!(
                    "broker_url must start with http:// or https://, got '{}'",
                    self.broker_url
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.p_offline) {
            return Err(MonitorError::config(format!(
                "p_offline must be between 0 and 1, got {}",
                self.p_offline
            )));
        }

        if self.poll_interval_secs == 0 {
            return Err(MonitorError::config("poll_interval_secs must be at least 1"));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > self.poll_interval_secs {
            return Err(MonitorError::config(format!(
                "request_timeout_secs must be between 1 and poll_interval_secs ({}), got {}",
                self.poll_interval_secs, self.request_timeout_secs
            )));
        }

        if let Some(parameter) = self.thresholds.first_invalid() {
            let range = self.thresholds.range(parameter);
            return Err(MonitorError::config(format!(
                "{} threshold must satisfy min <= max, got [{}, {}]",
                parameter, range.min, range.max
            )));
        }

        Ok(())
    }
}
