//! Reading sources.
//!
//! A [`ReadingSource`] supplies one [`ConcentrationReading`] per evaluation
//! cycle. [`SimulatedSensor`] stands in for real hardware and draws each
//! pollutant uniformly from a fixed range with a seedable RNG, so identical
//! seeds produce identical reading sequences.

use crate::error::AqiError;
use crate::model::{ConcentrationReading, Pollutant};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Supplies concentration readings, one per cycle.
pub trait ReadingSource {
    fn next_reading(&mut self) -> Result<ConcentrationReading, AqiError>;

    /// Short name for logs and dashboards.
    fn source_name(&self) -> &str;
}

/// Uniform sampling range for a simulated pollutant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedRange {
    pub min: f64,
    pub max: f64,
    /// Decimal places kept after sampling.
    pub decimals: i32,
}

/// Sampling ranges in canonical pollutant order.
pub const SIMULATED_RANGES: [(Pollutant, SimulatedRange); 6] = [
    (Pollutant::Pm25, SimulatedRange { min: 5.0, max: 300.0, decimals: 2 }),
    (Pollutant::Pm10, SimulatedRange { min: 20.0, max: 400.0, decimals: 2 }),
    (Pollutant::Co, SimulatedRange { min: 0.1, max: 20.0, decimals: 2 }),
    (Pollutant::So2, SimulatedRange { min: 5.0, max: 300.0, decimals: 2 }),
    (Pollutant::No2, SimulatedRange { min: 10.0, max: 500.0, decimals: 2 }),
    (Pollutant::O3, SimulatedRange { min: 0.02, max: 0.20, decimals: 3 }),
];

/// Pseudo-random sensor covering all six pollutants.
pub struct SimulatedSensor {
    rng: ChaCha8Rng,
    cycles: u64,
}

impl SimulatedSensor {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            cycles: 0,
        }
    }

    /// Number of readings produced so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    fn sample(&mut self, range: &SimulatedRange) -> f64 {
        let raw = self.rng.gen_range(range.min..=range.max);
        let scale = 10f64.powi(range.decimals);
        (raw * scale).round() / scale
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl ReadingSource for SimulatedSensor {
    fn next_reading(&mut self) -> Result<ConcentrationReading, AqiError> {
        let mut reading = ConcentrationReading::new();
        for (pollutant, range) in &SIMULATED_RANGES {
            let value = self.sample(range);
            reading.insert(*pollutant, value);
        }
        self.cycles += 1;
        log::debug!("simulated reading #{}: {:?}", self.cycles, reading);
        Ok(reading)
    }

    fn source_name(&self) -> &str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_readings() {
        let mut a = SimulatedSensor::new(7);
        let mut b = SimulatedSensor::new(7);
        for _ in 0..5 {
            assert_eq!(a.next_reading().unwrap(), b.next_reading().unwrap());
        }
        assert_eq!(a.cycles(), 5);
    }

    #[test]
    fn test_readings_stay_in_range() {
        let mut sensor = SimulatedSensor::default();
        for _ in 0..200 {
            let reading = sensor.next_reading().unwrap();
            assert_eq!(reading.len(), 6);
            for (pollutant, range) in &SIMULATED_RANGES {
                let value = reading.get(*pollutant).unwrap();
                assert!(
                    value >= range.min && value <= range.max,
                    "{pollutant} = {value} outside {}..={}",
                    range.min,
                    range.max
                );
            }
        }
    }

    #[test]
    fn test_readings_are_rounded() {
        let mut sensor = SimulatedSensor::new(1);
        let reading = sensor.next_reading().unwrap();
        let o3 = reading.get(Pollutant::O3).unwrap();
        assert!(((o3 * 1000.0).round() - o3 * 1000.0).abs() < 1e-6);
        let pm25 = reading.get(Pollutant::Pm25).unwrap();
        assert!(((pm25 * 100.0).round() - pm25 * 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_source_name() {
        assert_eq!(SimulatedSensor::default().source_name(), "simulated");
    }
}
