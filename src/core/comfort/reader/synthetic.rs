use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::comfort::reading::{Reading, SensorOutcome};

pub const TEMPERATURE_SPAN: RangeInclusive<f64> = 18.0..=30.0;
pub const HUMIDITY_SPAN: RangeInclusive<f64> = 30.0..=70.0;
pub const LUMINOSITY_SPAN: RangeInclusive<f64> = 10.0..=100.0;

/// Generates plausible readings and simulates device dropouts.
#[derive(Debug)]
pub struct SyntheticReader {
    rng: StdRng,
    p_offline: f64,
}

impl SyntheticReader {
    /// `p_offline` is clamped to `[0, 1]` (NaN means never offline); a fixed
    /// `seed` makes the sequence reproducible.
    pub fn new(p_offline: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            p_offline: if p_offline.is_nan() {
                0.0
            } else {
                p_offline.clamp(0.0, 1.0)
            },
        }
    }

    pub fn p_offline(&self) -> f64 {
        self.p_offline
    }

    pub fn read(&mut self) -> SensorOutcome {
        if self.rng.gen_bool(self.p_offline) {
            log::warn!("Synthetic device went offline this cycle");
            return SensorOutcome::Unavailable;
        }

        let temperature = round_to(self.rng.gen_range(TEMPERATURE_SPAN), 1);
        let humidity = round_to(self.rng.gen_range(HUMIDITY_SPAN), 1);
        let luminosity = round_to(self.rng.gen_range(LUMINOSITY_SPAN), 0);

        SensorOutcome::Reading(Reading::new(temperature, humidity, luminosity))
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
