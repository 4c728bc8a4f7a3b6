use aqi_core::error::AqiError;
use aqi_core::model::{ConcentrationReading, Pollutant};
use aqi_core::readings;
use std::path::PathBuf;

use crate::output;

/// Per-pollutant concentrations given on the command line.
#[derive(Debug, Default)]
pub struct ReadingFlags {
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub co: Option<f64>,
    pub so2: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
}

impl ReadingFlags {
    fn pairs(&self) -> [(Pollutant, Option<f64>); 6] {
        [
            (Pollutant::Pm25, self.pm25),
            (Pollutant::Pm10, self.pm10),
            (Pollutant::Co, self.co),
            (Pollutant::So2, self.so2),
            (Pollutant::No2, self.no2),
            (Pollutant::O3, self.o3),
        ]
    }
}

/// Merge a readings file (if any) with command-line flags. Flags win.
pub fn collect_readings(
    file: Option<PathBuf>,
    flags: &ReadingFlags,
) -> Result<ConcentrationReading, AqiError> {
    let mut reading = match file {
        Some(path) => readings::load_readings(&path)?,
        None => ConcentrationReading::new(),
    };

    for (pollutant, value) in flags.pairs() {
        if let Some(v) = value {
            if reading.insert(pollutant, v).is_some() {
                log::info!("{pollutant} from command line overrides readings file");
            }
        }
    }

    readings::validate_readings(&reading)?;
    Ok(reading)
}

pub fn run(
    file: Option<PathBuf>,
    flags: ReadingFlags,
    output_format: &str,
    verbose: bool,
) -> Result<(), AqiError> {
    let reading = collect_readings(file, &flags)?;
    let evaluation = aqi_core::evaluate(&reading)?;

    match output_format {
        "json" => output::json::print(&evaluation)?,
        _ => output::table::print_evaluation(&evaluation, verbose),
    }

    Ok(())
}
