use crate::error::AqiError;
use crate::model::{ConcentrationReading, Pollutant};
use std::path::Path;

/// Load a reading from a JSON file, e.g. `{"PM2.5": 10.0, "O3": 0.04}`.
pub fn load_readings(path: &Path) -> Result<ConcentrationReading, AqiError> {
    let content = std::fs::read_to_string(path).map_err(|e| AqiError::ReadingsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_readings(&content, path)
}

/// Parse a reading from a JSON string, reporting errors against `source`.
pub fn parse_readings(json: &str, source: &Path) -> Result<ConcentrationReading, AqiError> {
    let reading: ConcentrationReading =
        serde_json::from_str(json).map_err(|e| AqiError::ReadingsLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_readings(&reading)?;
    Ok(reading)
}

/// Parse a reading from a JSON string (no file path context).
pub fn parse_readings_str(json: &str) -> Result<ConcentrationReading, AqiError> {
    let reading: ConcentrationReading = serde_json::from_str(json)?;
    validate_readings(&reading)?;
    Ok(reading)
}

/// Validate that a reading is non-empty and every concentration is a
/// finite, non-negative number.
pub fn validate_readings(reading: &ConcentrationReading) -> Result<(), AqiError> {
    if reading.is_empty() {
        return Err(AqiError::EmptyReading);
    }

    for (pollutant, value) in reading.iter() {
        validate_concentration(pollutant, value)?;
    }

    Ok(())
}

/// Validate a single concentration: finite and non-negative.
pub fn validate_concentration(pollutant: Pollutant, value: f64) -> Result<(), AqiError> {
    if !value.is_finite() {
        return Err(AqiError::InvalidReading {
            pollutant: pollutant.to_string(),
            reason: format!("concentration {} is not a finite number", value),
        });
    }
    if value < 0.0 {
        return Err(AqiError::InvalidReading {
            pollutant: pollutant.to_string(),
            reason: format!("concentration {} is negative", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_readings() {
        let json = r#"{ "PM2.5": 10.0, "pm10": 40, "O3": 0.04 }"#;
        let reading = parse_readings_str(json).unwrap();
        assert_eq!(reading.len(), 3);
        assert_eq!(reading.get(Pollutant::Pm25), Some(10.0));
        assert_eq!(reading.get(Pollutant::Pm10), Some(40.0));
        assert_eq!(reading.get(Pollutant::O3), Some(0.04));
    }

    #[test]
    fn test_unknown_pollutant_rejected() {
        let json = r#"{ "PM2.5": 10.0, "XYZ": 1.0 }"#;
        assert!(parse_readings_str(json).is_err());
    }

    #[test]
    fn test_negative_value_rejected() {
        let json = r#"{ "CO": -0.5 }"#;
        let err = parse_readings_str(json).unwrap_err();
        assert!(matches!(err, AqiError::InvalidReading { ref pollutant, .. } if pollutant == "CO"));
    }

    #[test]
    fn test_mangled_pollutant_name_rejected() {
        let json = r#"{ "pm 2 5": 1.0 }"#;
        assert!(parse_readings_str(json).is_err());
    }

    #[test]
    fn test_validate_concentration() {
        assert!(validate_concentration(Pollutant::Co, 0.0).is_ok());
        assert!(validate_concentration(Pollutant::Co, 12.5).is_ok());
        for bad in [-0.1, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate_concentration(Pollutant::Co, bad),
                Err(AqiError::InvalidReading { .. })
            ));
        }
    }

    #[test]
    fn test_empty_readings_rejected() {
        assert!(matches!(
            parse_readings_str("{}"),
            Err(AqiError::EmptyReading)
        ));
    }

    #[test]
    fn test_load_readings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "SO2": 20, "NO2": 30 }}"#).unwrap();
        let reading = load_readings(file.path()).unwrap();
        assert_eq!(reading.get(Pollutant::So2), Some(20.0));
        assert_eq!(reading.get(Pollutant::No2), Some(30.0));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_readings(Path::new("/nonexistent/readings.json")).unwrap_err();
        assert!(matches!(err, AqiError::ReadingsLoad { .. }));
    }
}
