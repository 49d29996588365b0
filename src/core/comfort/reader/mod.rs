//! Sensor readers.
//!
//! A reader is picked once from the configuration and then asked for one
//! sample per poll cycle. Every failure is reported as
//! [`SensorOutcome::Unavailable`]; nothing is retried within a cycle.

mod live;
mod synthetic;

pub use live::{parse_entity, LiveReader, SERVICE_HEADER, SERVICE_PATH_HEADER};
pub use synthetic::{SyntheticReader, HUMIDITY_SPAN, LUMINOSITY_SPAN, TEMPERATURE_SPAN};

use crate::core::config::{MonitorConfig, SensorMode};
use crate::error::Result;

use super::reading::SensorOutcome;

/// Telemetry source for one device
#[derive(Debug)]
pub enum SensorReader {
    /// Context broker over HTTP
    Live(LiveReader),
    /// Random generator for demos and tests
    Synthetic(SyntheticReader),
}

impl SensorReader {
    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        match config.mode {
            SensorMode::Live => Ok(SensorReader::Live(LiveReader::from_config(config)?)),
            SensorMode::Synthetic => Ok(SensorReader::Synthetic(SyntheticReader::new(
                config.p_offline,
                config.seed,
            ))),
        }
    }

    /// Take one sample. Never fails; outages come back as `Unavailable`.
    pub async fn read(&mut self) -> SensorOutcome {
        match self {
            SensorReader::Live(reader) => reader.read().await,
            SensorReader::Synthetic(reader) => reader.read(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SensorReader::Live(reader) => format!("live ({})", reader.url()),
            SensorReader::Synthetic(reader) => {
                format!("synthetic (p_offline = {})", reader.p_offline())
            }
        }
    }
}
