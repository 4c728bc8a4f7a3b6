use crate::breakpoints::{self, schema::BreakpointSegment};
use crate::calculate::outcome::{Evaluation, PollutantResult};
use crate::category::AqiCategory;
use crate::error::AqiError;
use crate::model::{ConcentrationReading, Pollutant};

/// AQI reported when a concentration is not covered by the pollutant's table.
pub const SATURATED_AQI: u16 = 500;

/// Individual AQI for one pollutant concentration.
///
/// Uses the first segment whose inclusive range contains the concentration
/// and truncates the interpolated value toward zero. Concentrations outside
/// every segment (negative, above the table, or between two published
/// segments) saturate to [`SATURATED_AQI`].
pub fn individual_aqi(concentration: f64, pollutant: Pollutant) -> u16 {
    match breakpoints::find_segment(pollutant, concentration) {
        Some(seg) => seg.interpolate(concentration),
        None => SATURATED_AQI,
    }
}

/// Individual AQI for a pollutant given by name.
pub fn individual_aqi_named(concentration: f64, pollutant: &str) -> Result<u16, AqiError> {
    let pollutant: Pollutant = pollutant.parse()?;
    Ok(individual_aqi(concentration, pollutant))
}

/// Compute the individual AQI together with the matched segment and a reason line.
pub fn assess(concentration: f64, pollutant: Pollutant) -> PollutantResult {
    let unit = pollutant.unit();

    match breakpoints::find_segment(pollutant, concentration) {
        Some(seg) => {
            let aqi = seg.interpolate(concentration);
            log::debug!("{pollutant}: {concentration} {unit} -> AQI {aqi}");
            PollutantResult {
                pollutant,
                concentration,
                unit,
                aqi,
                segment: Some(*seg),
                saturated: false,
                reason: in_segment_reason(pollutant, concentration, seg, aqi),
            }
        }
        None => {
            log::warn!(
                "{pollutant}: {concentration} {unit} is outside the breakpoint table, reporting AQI {SATURATED_AQI}"
            );
            PollutantResult {
                pollutant,
                concentration,
                unit,
                aqi: SATURATED_AQI,
                segment: None,
                saturated: true,
                reason: saturated_reason(pollutant, concentration),
            }
        }
    }
}

fn in_segment_reason(
    pollutant: Pollutant,
    concentration: f64,
    seg: &BreakpointSegment,
    aqi: u16,
) -> String {
    format!(
        "{}: {} {} in [{}, {}] -> AQI {} (band {}-{})",
        pollutant,
        concentration,
        pollutant.unit(),
        seg.conc_low,
        seg.conc_high,
        aqi,
        seg.aqi_low,
        seg.aqi_high
    )
}

fn saturated_reason(pollutant: Pollutant, concentration: f64) -> String {
    let max = breakpoints::max_concentration(pollutant);
    let why = if concentration > max {
        format!("exceeds table maximum {}", max)
    } else {
        "is not covered by any breakpoint segment".to_string()
    };
    format!(
        "{}: {} {} {} -> AQI {} (saturated)",
        pollutant,
        concentration,
        pollutant.unit(),
        why,
        SATURATED_AQI
    )
}

/// Evaluate a full reading: per-pollutant AQI, dominant pollutant, category.
///
/// Only pollutants present in the reading are considered. Ties on the
/// maximum AQI go to the pollutant that comes first in canonical order.
pub fn evaluate(readings: &ConcentrationReading) -> Result<Evaluation, AqiError> {
    let pollutant_results: Vec<PollutantResult> = readings
        .iter()
        .map(|(pollutant, concentration)| assess(concentration, pollutant))
        .collect();

    // Keep the first strictly greater AQI so earlier pollutants win ties.
    let (dominant_pollutant, final_aqi) = pollutant_results
        .iter()
        .fold(None, |best: Option<(Pollutant, u16)>, r| match best {
            Some((_, best_aqi)) if r.aqi <= best_aqi => best,
            _ => Some((r.pollutant, r.aqi)),
        })
        .ok_or(AqiError::EmptyReading)?;

    let category = AqiCategory::classify(final_aqi);
    log::debug!("dominant {dominant_pollutant} AQI {final_aqi} ({category})");

    Ok(Evaluation {
        pollutant_results,
        dominant_pollutant,
        final_aqi,
        category,
        message: category.message().to_string(),
        color: category.color(),
    })
}
