use crate::breakpoints::schema::BreakpointSegment;
use crate::category::{AqiCategory, Color};
use crate::model::{Pollutant, Unit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Individual AQI per pollutant.
pub type AqiResult = BTreeMap<Pollutant, u16>;

/// Individual AQI for one pollutant reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantResult {
    pub pollutant: Pollutant,
    /// Raw concentration as supplied.
    pub concentration: f64,
    pub unit: Unit,
    /// Truncated individual AQI.
    pub aqi: u16,
    /// Segment the concentration fell into; `None` when saturated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<BreakpointSegment>,
    /// True if no segment covered the concentration and the AQI was pinned to 500.
    pub saturated: bool,
    /// Human-readable explanation of the computation.
    pub reason: String,
}

/// Composite AQI for a full set of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Per-pollutant results, in canonical order.
    pub pollutant_results: Vec<PollutantResult>,
    /// Pollutant with the highest individual AQI (earliest wins on ties).
    pub dominant_pollutant: Pollutant,
    pub final_aqi: u16,
    pub category: AqiCategory,
    pub message: String,
    pub color: Color,
}

impl Evaluation {
    pub fn per_pollutant_aqi(&self) -> AqiResult {
        self.pollutant_results
            .iter()
            .map(|r| (r.pollutant, r.aqi))
            .collect()
    }

    pub fn aqi_for(&self, pollutant: Pollutant) -> Option<u16> {
        self.result_for(pollutant).map(|r| r.aqi)
    }

    pub fn result_for(&self, pollutant: Pollutant) -> Option<&PollutantResult> {
        self.pollutant_results
            .iter()
            .find(|r| r.pollutant == pollutant)
    }
}
