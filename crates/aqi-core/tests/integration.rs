//! Integration tests for the AQI engine end-to-end.
//!
//! Uses a MockSource that replays pre-built readings, so these tests
//! exercise `run_cycle` without the simulated sensor's randomness.

use aqi_core::breakpoints::{self, max_concentration, segments_for};
use aqi_core::category::AqiCategory;
use aqi_core::error::AqiError;
use aqi_core::model::{ConcentrationReading, Pollutant};
use aqi_core::readings::parse_readings_str;
use aqi_core::source::{ReadingSource, SimulatedSensor};
use aqi_core::{evaluate, individual_aqi, individual_aqi_named, run_cycle};

struct MockSource {
    readings: Vec<ConcentrationReading>,
}

impl ReadingSource for MockSource {
    fn next_reading(&mut self) -> Result<ConcentrationReading, AqiError> {
        if self.readings.is_empty() {
            return Ok(ConcentrationReading::new());
        }
        Ok(self.readings.remove(0))
    }

    fn source_name(&self) -> &str {
        "mock"
    }
}

/// Concentration grid at the precision each table is published in.
fn grid(pollutant: Pollutant) -> Vec<f64> {
    let (steps, scale) = match pollutant {
        Pollutant::Pm25 => (5004, 10.0),
        Pollutant::Pm10 => (604, 1.0),
        Pollutant::Co => (504, 10.0),
        Pollutant::So2 => (1004, 1.0),
        Pollutant::No2 => (2049, 1.0),
        Pollutant::O3 => (604, 1000.0),
    };
    (0..=steps).map(|k| k as f64 / scale).collect()
}

// ---------------------------------------------------------------------------
// Test 1: Segment endpoints map onto their AQI band
// ---------------------------------------------------------------------------
#[test]
fn segment_endpoints_match_aqi_band() {
    for pollutant in Pollutant::ALL {
        for seg in segments_for(pollutant) {
            assert_eq!(
                individual_aqi(seg.conc_low, pollutant),
                seg.aqi_low,
                "{pollutant} at {}",
                seg.conc_low
            );
            let at_high = individual_aqi(seg.conc_high, pollutant);
            assert!(
                at_high == seg.aqi_high || at_high + 1 == seg.aqi_high,
                "{pollutant} at {} gave {at_high}, expected ~{}",
                seg.conc_high,
                seg.aqi_high
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Test 2: AQI never decreases as concentration rises
// ---------------------------------------------------------------------------
#[test]
fn individual_aqi_is_monotonic() {
    for pollutant in Pollutant::ALL {
        let mut prev = 0u16;
        for c in grid(pollutant) {
            let aqi = individual_aqi(c, pollutant);
            assert!(aqi >= prev, "{pollutant}: AQI dropped to {aqi} at {c}");
            prev = aqi;
        }
        assert!(prev >= 499);
    }
}

// ---------------------------------------------------------------------------
// Test 3: Anything above the table saturates to 500
// ---------------------------------------------------------------------------
#[test]
fn above_table_saturates() {
    assert_eq!(individual_aqi(1000.0, Pollutant::Pm25), 500);
    for pollutant in Pollutant::ALL {
        let max = max_concentration(pollutant);
        assert_eq!(individual_aqi(max * 1.01, pollutant), 500, "{pollutant}");
        assert_eq!(individual_aqi(max * 10.0, pollutant), 500, "{pollutant}");
    }
}

// ---------------------------------------------------------------------------
// Test 4: Reference reading from a clean-air cycle
// ---------------------------------------------------------------------------
#[test]
fn reference_reading_is_good() {
    let reading = parse_readings_str(
        r#"{"PM2.5": 10.0, "PM10": 40, "CO": 2.0, "SO2": 20, "NO2": 30, "O3": 0.04}"#,
    )
    .unwrap();
    let eval = evaluate(&reading).unwrap();

    let per = eval.per_pollutant_aqi();
    assert_eq!(per[&Pollutant::Pm25], 41);
    assert_eq!(per[&Pollutant::Pm10], 37);
    assert_eq!(per[&Pollutant::Co], 22);
    assert_eq!(per[&Pollutant::So2], 28);
    assert_eq!(per[&Pollutant::No2], 28);
    assert_eq!(per[&Pollutant::O3], 37);

    assert_eq!(eval.dominant_pollutant, Pollutant::Pm25);
    assert_eq!(eval.final_aqi, 41);
    assert_eq!(eval.category, AqiCategory::Good);
    assert_eq!(eval.message, "Air is clean and healthy.");
}

// ---------------------------------------------------------------------------
// Test 5: Polluted reading, dominant pollutant not first in order
// ---------------------------------------------------------------------------
#[test]
fn polluted_reading_picks_worst_pollutant() {
    let reading = ConcentrationReading::from_pairs(&[
        ("PM2.5", 35.5),
        ("PM10", 155.0),
        ("NO2", 650.0),
        ("O3", 0.055),
    ])
    .unwrap();
    let eval = evaluate(&reading).unwrap();

    assert_eq!(eval.aqi_for(Pollutant::Pm25), Some(101));
    assert_eq!(eval.aqi_for(Pollutant::Pm10), Some(101));
    assert_eq!(eval.aqi_for(Pollutant::No2), Some(201));
    assert_eq!(eval.aqi_for(Pollutant::O3), Some(51));
    assert_eq!(eval.dominant_pollutant, Pollutant::No2);
    assert_eq!(eval.category, AqiCategory::VeryUnhealthy);
    assert_eq!(eval.message, "Serious health risks; stay indoors.");
}

// ---------------------------------------------------------------------------
// Test 6: Unknown pollutant identifiers fail fast
// ---------------------------------------------------------------------------
#[test]
fn unknown_pollutant_fails() {
    assert!(matches!(
        individual_aqi_named(10.0, "XYZ"),
        Err(AqiError::UnknownPollutant(_))
    ));
    assert!(matches!(
        breakpoints::segments_for_name("PM1"),
        Err(AqiError::UnknownPollutant(_))
    ));
    assert!(ConcentrationReading::from_pairs(&[("PM2.5", 1.0), ("XYZ", 1.0)]).is_err());
}

// ---------------------------------------------------------------------------
// Test 7: run_cycle pulls from the source and evaluates
// ---------------------------------------------------------------------------
#[test]
fn run_cycle_evaluates_source_reading() {
    let mut source = MockSource {
        readings: vec![
            ConcentrationReading::new()
                .with(Pollutant::Pm25, 250.5)
                .with(Pollutant::Co, 2.0),
            ConcentrationReading::new().with(Pollutant::So2, 20.0),
        ],
    };

    let first = run_cycle(&mut source, 1).unwrap();
    assert_eq!(first.cycle, 1);
    assert_eq!(first.source, "mock");
    assert_eq!(first.evaluation.dominant_pollutant, Pollutant::Pm25);
    assert_eq!(first.evaluation.final_aqi, 301);
    assert_eq!(first.evaluation.category, AqiCategory::Hazardous);

    let second = run_cycle(&mut source, 2).unwrap();
    assert_eq!(second.evaluation.dominant_pollutant, Pollutant::So2);
    assert_eq!(second.evaluation.final_aqi, 28);

    // Exhausted source yields an empty reading
    assert!(matches!(
        run_cycle(&mut source, 3),
        Err(AqiError::EmptyReading)
    ));
}

// ---------------------------------------------------------------------------
// Test 8: run_cycle rejects invalid source readings
// ---------------------------------------------------------------------------
#[test]
fn run_cycle_rejects_negative_reading() {
    let mut source = MockSource {
        readings: vec![ConcentrationReading::new().with(Pollutant::Co, -1.0)],
    };
    assert!(matches!(
        run_cycle(&mut source, 1),
        Err(AqiError::InvalidReading { .. })
    ));
}

// ---------------------------------------------------------------------------
// Test 9: Simulated sensor cycles are deterministic per seed
// ---------------------------------------------------------------------------
#[test]
fn simulated_cycles_are_reproducible() {
    let mut a = SimulatedSensor::new(2024);
    let mut b = SimulatedSensor::new(2024);
    for cycle in 1..=10 {
        let ra = run_cycle(&mut a, cycle).unwrap();
        let rb = run_cycle(&mut b, cycle).unwrap();
        assert_eq!(ra.reading, rb.reading);
        assert_eq!(ra.evaluation, rb.evaluation);
        assert_eq!(ra.evaluation.pollutant_results.len(), 6);
        assert_eq!(
            ra.evaluation.category,
            AqiCategory::classify(ra.evaluation.final_aqi)
        );
    }
}

// ---------------------------------------------------------------------------
// Test 10: Evaluation serializes with display names
// ---------------------------------------------------------------------------
#[test]
fn evaluation_json_shape() {
    let reading = ConcentrationReading::new().with(Pollutant::Pm25, 10.0);
    let eval = evaluate(&reading).unwrap();
    let json = serde_json::to_value(&eval).unwrap();

    assert_eq!(json["dominant_pollutant"], "PM2.5");
    assert_eq!(json["final_aqi"], 41);
    assert_eq!(json["category"], "good");
    assert_eq!(json["color"], "green");
    assert_eq!(json["pollutant_results"][0]["unit"], "µg/m³");
    assert_eq!(json["pollutant_results"][0]["segment"]["aqi_high"], 50);
}
