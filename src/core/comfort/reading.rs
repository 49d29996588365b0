use serde::{Deserialize, Serialize};
use std::fmt;

/// Measured environmental parameter.
///
/// Declaration order is the evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Temperature,
    Humidity,
    Luminosity,
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [
        Parameter::Temperature,
        Parameter::Humidity,
        Parameter::Luminosity,
    ];

    /// Attribute name on the broker entity
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Humidity => "humidity",
            Parameter::Luminosity => "luminosity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::Humidity => "Humidity",
            Parameter::Luminosity => "Luminosity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::Humidity => "%",
            Parameter::Luminosity => "",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One complete sample of the three measured parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: f64,
    pub luminosity: f64, // relative 0-100
}

impl Reading {
    pub fn new(temperature: f64, humidity: f64, luminosity: f64) -> Self {
        Self {
            temperature,
            humidity,
            luminosity,
        }
    }

    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::Luminosity => self.luminosity,
        }
    }
}

/// Result of one sensor read: either a reading or an explicit outage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorOutcome {
    Reading(Reading),
    Unavailable,
}

impl SensorOutcome {
    pub fn reading(&self) -> Option<&Reading> {
        match self {
            SensorOutcome::Reading(reading) => Some(reading),
            SensorOutcome::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, SensorOutcome::Unavailable)
    }
}
