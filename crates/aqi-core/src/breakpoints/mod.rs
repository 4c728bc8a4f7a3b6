pub mod builtin;
pub mod schema;

use crate::error::AqiError;
use crate::model::Pollutant;
use schema::BreakpointSegment;

/// Ordered breakpoint segments for a pollutant, lowest concentration first.
pub fn segments_for(pollutant: Pollutant) -> &'static [BreakpointSegment] {
    match pollutant {
        Pollutant::Pm25 => &builtin::PM25,
        Pollutant::Pm10 => &builtin::PM10,
        Pollutant::Co => &builtin::CO,
        Pollutant::So2 => &builtin::SO2,
        Pollutant::No2 => &builtin::NO2,
        Pollutant::O3 => &builtin::O3,
    }
}

/// Look up segments by pollutant name (e.g. "PM2.5", "no2").
pub fn segments_for_name(name: &str) -> Result<&'static [BreakpointSegment], AqiError> {
    let pollutant: Pollutant = name.parse()?;
    Ok(segments_for(pollutant))
}

/// All tables in canonical pollutant order.
pub fn table() -> impl Iterator<Item = (Pollutant, &'static [BreakpointSegment])> {
    Pollutant::ALL.into_iter().map(|p| (p, segments_for(p)))
}

/// First segment containing the concentration, if any.
///
/// On a shared boundary the earlier segment wins.
pub fn find_segment(pollutant: Pollutant, concentration: f64) -> Option<&'static BreakpointSegment> {
    segments_for(pollutant)
        .iter()
        .find(|seg| seg.contains(concentration))
}

/// Highest concentration covered by the pollutant's table.
pub fn max_concentration(pollutant: Pollutant) -> f64 {
    segments_for(pollutant)
        .last()
        .map(|seg| seg.conc_high)
        .unwrap_or(0.0)
}

/// Validate that a segment sequence is well-formed.
///
/// Segments must be non-empty, start at zero, ascend without overlapping,
/// and cover contiguous AQI bands.
pub fn validate_segments(segments: &[BreakpointSegment]) -> Result<(), AqiError> {
    let first = segments
        .first()
        .ok_or_else(|| AqiError::InvalidTable("table has no segments".into()))?;

    if first.conc_low != 0.0 || first.aqi_low != 0 {
        return Err(AqiError::InvalidTable(format!(
            "first segment must start at concentration 0 and AQI 0, got ({}, {})",
            first.conc_low, first.aqi_low
        )));
    }

    for seg in segments {
        if seg.conc_low.is_nan()
            || seg.conc_high.is_nan()
            || seg.conc_low > seg.conc_high
            || seg.conc_low < 0.0
        {
            return Err(AqiError::InvalidTable(format!(
                "segment [{}, {}] has an invalid concentration range",
                seg.conc_low, seg.conc_high
            )));
        }
        if seg.aqi_low >= seg.aqi_high {
            return Err(AqiError::InvalidTable(format!(
                "segment [{}, {}] has an invalid AQI band {}-{}",
                seg.conc_low, seg.conc_high, seg.aqi_low, seg.aqi_high
            )));
        }
    }

    for pair in segments.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.conc_low <= prev.conc_high {
            return Err(AqiError::InvalidTable(format!(
                "segment starting at {} overlaps previous segment ending at {}",
                next.conc_low, prev.conc_high
            )));
        }
        if next.aqi_low != prev.aqi_high + 1 {
            return Err(AqiError::InvalidTable(format!(
                "AQI band {}-{} does not follow {}-{}",
                next.aqi_low, next.aqi_high, prev.aqi_low, prev.aqi_high
            )));
        }
    }

    Ok(())
}
