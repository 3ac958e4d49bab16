//! Unit handling for weights entered and displayed by the widgets
//!
//! All weight is stored in kilograms internally and converted at the
//! display boundary.
//!
//! # Design Principles
//!
//! 1. **Internal Consistency**: Widget state and plate math use kilograms only
//! 2. **Conversion at Boundaries**: Convert on display/input, never mid-computation
//! 3. **Readable Pounds**: Imperial display rounds up to the next whole pound,
//!    so a 20 kg plate reads as 45 lb rather than 44.0924 lb

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilogram to pound conversion factor
pub const KG_TO_LBS: f64 = 2.20462;

/// Unit system selected on the barbell widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Convert a value entered in this system to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value / KG_TO_LBS,
        }
    }

    /// Convert kilograms to this system without display rounding
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => kg * KG_TO_LBS,
        }
    }

    /// User-facing weight in this system
    ///
    /// Metric passes kilograms through unchanged. Imperial converts to
    /// pounds and rounds up to the next whole pound.
    pub fn display_weight(&self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => (kg * KG_TO_LBS).ceil(),
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "kg" | "kilogram" | "kilograms" => Ok(UnitSystem::Metric),
            "imperial" | "lb" | "lbs" | "pound" | "pounds" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}
