pub mod breakpoints;
pub mod calculate;
pub mod category;
pub mod error;
pub mod model;
pub mod readings;
pub mod source;

pub use calculate::{assess, evaluate, individual_aqi, individual_aqi_named};

use calculate::outcome::Evaluation;
use error::AqiError;
use model::ConcentrationReading;
use serde::Serialize;
use source::ReadingSource;

/// One monitoring cycle: the reading that was taken and its evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub source: String,
    pub reading: ConcentrationReading,
    pub evaluation: Evaluation,
}

/// Main API entry point: pull one reading from a source and evaluate it.
///
/// Readings are validated before evaluation, so a source yielding an empty
/// set or negative concentrations fails here rather than saturating.
pub fn run_cycle(source: &mut dyn ReadingSource, cycle: u64) -> Result<CycleReport, AqiError> {
    let reading = source.next_reading()?;
    readings::validate_readings(&reading)?;

    let evaluation = evaluate(&reading)?;
    log::info!(
        "cycle {} from {}: AQI {} ({}), dominant {}",
        cycle,
        source.source_name(),
        evaluation.final_aqi,
        evaluation.category,
        evaluation.dominant_pollutant
    );

    Ok(CycleReport {
        cycle,
        source: source.source_name().to_string(),
        reading,
        evaluation,
    })
}
