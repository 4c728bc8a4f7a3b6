use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AqiError {
    #[error("unknown pollutant '{0}'. Supported: PM2.5, PM10, CO, SO2, NO2, O3")]
    UnknownPollutant(String),

    #[error("no pollutant readings supplied")]
    EmptyReading,

    #[error("invalid reading for {pollutant}: {reason}")]
    InvalidReading { pollutant: String, reason: String },

    #[error("invalid breakpoint table: {0}")]
    InvalidTable(String),

    #[error("failed to load readings from {path}: {reason}")]
    ReadingsLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
