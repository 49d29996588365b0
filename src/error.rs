use std::io;
use thiserror::Error;

/// Custom error type for the comfort monitor
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Broker returned HTTP {0}")]
    Protocol(reqwest::StatusCode),

    #[error("Unexpected payload: {0}")]
    Payload(String),
}

/// Result type alias for the comfort monitor
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MonitorError::Config(msg.into())
    }

    /// Create a payload error
    pub fn payload<S: Into<String>>(msg: S) -> Self {
        MonitorError::Payload(msg.into())
    }

    /// Whether this error is a startup configuration problem (fatal)
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            MonitorError::Config(_) | MonitorError::ConfigParse(_) | MonitorError::ConfigSerialize(_)
        )
    }
}
