//! BMI calculation for the BMI widget
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: Calculation and classification have no side effects
//! 2. **Display-Ready Results**: Severity and gauge fill are computed here so
//!    the rendering layer never re-derives thresholds
//! 3. **Type Safety**: Categories are an enum, not loose strings

use serde::{Deserialize, Serialize};

/// Upper end of the BMI gauge; values beyond this pin the needle
pub const GAUGE_MAX_BMI: f64 = 40.0;

// ============================================================================
// BMI Calculation
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
}

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Healthy => (18.5, 24.9),
            BmiCategory::Overweight => (24.9, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
        }
    }

    /// Severity keyword the status badge is styled with
    pub fn severity(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "error",
            BmiCategory::Healthy => "success",
            BmiCategory::Overweight => "warning",
        }
    }
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::Healthy
    } else {
        BmiCategory::Overweight
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value
    pub value: f64,
    /// BMI category
    pub category: BmiCategory,
}

impl BmiResult {
    /// Percentage fill of the radial gauge, clamped to 0-100
    pub fn gauge_fill_percent(&self) -> f64 {
        (self.value / GAUGE_MAX_BMI * 100.0).clamp(0.0, 100.0)
    }
}

/// Calculate complete BMI result
pub fn calculate_bmi_result(weight_kg: f64, height_cm: f64) -> BmiResult {
    let bmi = calculate_bmi(weight_kg, height_cm);
    BmiResult {
        value: bmi,
        category: classify_bmi(bmi),
    }
}

// ============================================================================
// Widget State
// ============================================================================

/// BMI widget state
///
/// Holds the two parsed input fields and the last computed result.
/// The result only changes when `calculate` runs with both fields set,
/// so a half-edited form keeps showing the previous reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiCalculator {
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    result: Option<BmiResult>,
}

impl BmiCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    pub fn set_weight(&mut self, weight_kg: Option<f64>) {
        self.weight_kg = weight_kg;
    }

    pub fn set_height(&mut self, height_cm: Option<f64>) {
        self.height_cm = height_cm;
    }

    /// Recompute the result if both fields are filled in
    pub fn calculate(&mut self) -> Option<&BmiResult> {
        if let (Some(weight), Some(height)) = (self.weight_kg, self.height_cm) {
            self.result = Some(calculate_bmi_result(weight, height));
        }
        self.result.as_ref()
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
