use serde::{Deserialize, Serialize};
use std::fmt;

/// Health category for an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// EPA display color for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
}

impl AqiCategory {
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Classify an AQI value. Bands are checked in ascending order.
    pub fn classify(aqi: u16) -> AqiCategory {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthyForSensitiveGroups,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Advisory message shown alongside the category.
    pub fn message(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air is clean and healthy.",
            AqiCategory::Moderate => "Air quality is acceptable.",
            AqiCategory::UnhealthyForSensitiveGroups => {
                "Children & elderly should limit outdoor time."
            }
            AqiCategory::Unhealthy => "Avoid prolonged outdoor activities.",
            AqiCategory::VeryUnhealthy => "Serious health risks; stay indoors.",
            AqiCategory::Hazardous => "Health emergency: Avoid going outside.",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            AqiCategory::Good => Color::Green,
            AqiCategory::Moderate => Color::Yellow,
            AqiCategory::UnhealthyForSensitiveGroups => Color::Orange,
            AqiCategory::Unhealthy => Color::Red,
            AqiCategory::VeryUnhealthy => Color::Purple,
            AqiCategory::Hazardous => Color::Maroon,
        }
    }

    /// Inclusive AQI band; `Hazardous` is open-ended and reported up to 500.
    pub fn band(&self) -> (u16, u16) {
        match self {
            AqiCategory::Good => (0, 50),
            AqiCategory::Moderate => (51, 100),
            AqiCategory::UnhealthyForSensitiveGroups => (101, 150),
            AqiCategory::Unhealthy => (151, 200),
            AqiCategory::VeryUnhealthy => (201, 300),
            AqiCategory::Hazardous => (301, 500),
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Maroon => "maroon",
        };
        f.pad(name)
    }
}
