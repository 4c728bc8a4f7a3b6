use aqi_core::calculate::outcome::PollutantResult;
use aqi_core::error::AqiError;
use aqi_core::model::Pollutant;
use aqi_core::readings;

use crate::output;

/// Parse and validate command-line input, then assess it.
pub fn assess_input(pollutant: &str, concentration: f64) -> Result<PollutantResult, AqiError> {
    let pollutant: Pollutant = pollutant.parse()?;
    readings::validate_concentration(pollutant, concentration)?;
    Ok(aqi_core::assess(concentration, pollutant))
}

pub fn run(pollutant: &str, concentration: f64, output_format: &str) -> Result<(), AqiError> {
    let result = assess_input(pollutant, concentration)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_assessment(&result),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let result = assess_input("pm2.5", 10.0).unwrap();
        assert_eq!(result.pollutant, Pollutant::Pm25);
        assert_eq!(result.aqi, 41);
    }

    #[test]
    fn test_above_table_still_saturates() {
        let result = assess_input("PM2.5", 1000.0).unwrap();
        assert_eq!(result.aqi, 500);
        assert!(result.saturated);
    }

    #[test]
    fn test_non_finite_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                assess_input("PM2.5", bad),
                Err(AqiError::InvalidReading { .. })
            ));
        }
        assert!(run("PM2.5", f64::NAN, "table").is_err());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            assess_input("CO", -1.0),
            Err(AqiError::InvalidReading { .. })
        ));
    }

    #[test]
    fn test_mangled_pollutant_rejected() {
        assert!(matches!(
            assess_input("p-m 2.5", 10.0),
            Err(AqiError::UnknownPollutant(_))
        ));
    }
}
