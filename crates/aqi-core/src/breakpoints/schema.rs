use serde::{Deserialize, Serialize};

/// A concentration range mapped linearly onto an AQI sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointSegment {
    pub conc_low: f64,
    pub conc_high: f64,
    pub aqi_low: u16,
    pub aqi_high: u16,
}

impl BreakpointSegment {
    pub const fn new(conc_low: f64, conc_high: f64, aqi_low: u16, aqi_high: u16) -> Self {
        Self {
            conc_low,
            conc_high,
            aqi_low,
            aqi_high,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, concentration: f64) -> bool {
        self.conc_low <= concentration && concentration <= self.conc_high
    }

    /// Linear interpolation, truncated toward zero.
    pub fn interpolate(&self, concentration: f64) -> u16 {
        // AQI = ((AQIhigh - AQIlow) / (Chigh - Clow)) * (C - Clow) + AQIlow
        let slope =
            f64::from(self.aqi_high - self.aqi_low) / (self.conc_high - self.conc_low);
        let aqi = slope * (concentration - self.conc_low) + f64::from(self.aqi_low);
        aqi.trunc() as u16
    }
}
