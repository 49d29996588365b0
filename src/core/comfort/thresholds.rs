//! Comfort threshold table.
//!
//! Maps each measured parameter to the range considered ideal for studying.

use serde::{Deserialize, Serialize};

use super::reading::Parameter;

/// Inclusive `[min, max]` range for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRange {
    pub min: f64,
    pub max: f64,
}

impl ThresholdRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds are in range; only strictly smaller or larger values are out.
    pub fn contains(&self, value: f64) -> bool {
        !(value < self.min || value > self.max)
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Threshold table for all measured parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub temperature: ThresholdRange, // °C
    pub humidity: ThresholdRange,    // %
    pub luminosity: ThresholdRange,  // 0-100
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temperature: ThresholdRange::new(20.0, 26.0),
            humidity: ThresholdRange::new(40.0, 60.0),
            luminosity: ThresholdRange::new(30.0, 80.0),
        }
    }
}

impl Thresholds {
    pub fn range(&self, parameter: Parameter) -> ThresholdRange {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::Luminosity => self.luminosity,
        }
    }

    /// Returns the first parameter whose range is empty or non-finite.
    pub fn first_invalid(&self) -> Option<Parameter> {
        Parameter::ALL
            .into_iter()
            .find(|&parameter| !self.range(parameter).is_valid())
    }
}
