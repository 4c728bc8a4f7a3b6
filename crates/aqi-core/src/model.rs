use crate::error::AqiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The six pollutants with published breakpoint tables.
///
/// Variant order is the canonical order (PM2.5, PM10, CO, SO2, NO2, O3) and
/// drives iteration, display and dominant-pollutant tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    So2,
    No2,
    O3,
}

impl Pollutant {
    /// All pollutants in canonical order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::O3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Pollutant::Co => Unit::MgPerM3,
            Pollutant::O3 => Unit::Ppm,
            _ => Unit::UgPerM3,
        }
    }

    /// Case-insensitive match on the accepted spellings, surrounding
    /// whitespace ignored.
    pub fn from_str_loose(s: &str) -> Option<Pollutant> {
        let key = s.trim().to_uppercase();
        match key.as_str() {
            "PM2.5" | "PM25" | "PM2_5" => Some(Pollutant::Pm25),
            "PM10" => Some(Pollutant::Pm10),
            "CO" => Some(Pollutant::Co),
            "SO2" => Some(Pollutant::So2),
            "NO2" => Some(Pollutant::No2),
            "O3" => Some(Pollutant::O3),
            _ => None,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Pollutant {
    type Err = AqiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::from_str_loose(s).ok_or_else(|| AqiError::UnknownPollutant(s.to_string()))
    }
}

impl TryFrom<String> for Pollutant {
    type Error = AqiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pollutant> for String {
    fn from(p: Pollutant) -> String {
        p.name().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "µg/m³")]
    UgPerM3,
    #[serde(rename = "mg/m³")]
    MgPerM3,
    #[serde(rename = "ppm")]
    Ppm,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Unit::UgPerM3 => "µg/m³",
            Unit::MgPerM3 => "mg/m³",
            Unit::Ppm => "ppm",
        };
        f.pad(symbol)
    }
}

/// One cycle's raw concentrations, keyed by pollutant.
///
/// Backed by a `BTreeMap` so iteration always follows canonical order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcentrationReading {
    values: BTreeMap<Pollutant, f64>,
}

impl ConcentrationReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a reading from `(name, concentration)` pairs.
    ///
    /// Fails fast with `UnknownPollutant` on the first unrecognized name.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, f64)]) -> Result<Self, AqiError> {
        let mut reading = Self::new();
        for (name, value) in pairs {
            let pollutant: Pollutant = name.as_ref().parse()?;
            reading.insert(pollutant, *value);
        }
        Ok(reading)
    }

    pub fn with(mut self, pollutant: Pollutant, concentration: f64) -> Self {
        self.insert(pollutant, concentration);
        self
    }

    /// Returns the previous concentration for this pollutant, if any.
    pub fn insert(&mut self, pollutant: Pollutant, concentration: f64) -> Option<f64> {
        self.values.insert(pollutant, concentration)
    }

    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        self.values.get(&pollutant).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Pollutant, f64)> for ConcentrationReading {
    fn from_iter<I: IntoIterator<Item = (Pollutant, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
