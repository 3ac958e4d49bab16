//! FitBoard WASM Module
//!
//! Browser bindings over `fitboard-core`. The page keeps one instance per
//! widget and calls in on every interaction. Scalar results cross the
//! boundary as numbers, structured results as JSON strings, and failures
//! as thrown strings. Dates travel as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use fitboard_core::barbell::BarbellCalculator as CoreBarbell;
use fitboard_core::bmi;
use fitboard_core::calories::CalorieTracker as CoreCalorieTracker;
use fitboard_core::lifts::LiftTracker as CoreLiftTracker;
use fitboard_core::plates::{Plate, PlateCatalog, PlateColor};
use fitboard_core::units::UnitSystem;
use fitboard_core::validation;

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("Invalid date: {}", raw))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

// ============================================================================
// BMI
// ============================================================================

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    bmi::calculate_bmi(weight_kg, height_cm)
}

#[derive(Serialize)]
struct BmiReport {
    value: f64,
    category: &'static str,
    severity: &'static str,
    gauge_fill_percent: f64,
}

/// Full BMI report as JSON: value, category, badge severity, gauge fill
#[wasm_bindgen]
pub fn bmi_report_json(weight_kg: f64, height_cm: f64) -> Result<String, String> {
    validation::validate_body_weight_kg(weight_kg).map_err(|e| e.to_string())?;
    validation::validate_height_cm(height_cm).map_err(|e| e.to_string())?;
    let result = bmi::calculate_bmi_result(weight_kg, height_cm);
    to_json(&BmiReport {
        value: result.value,
        category: result.category.description(),
        severity: result.category.severity(),
        gauge_fill_percent: result.gauge_fill_percent(),
    })
}

// ============================================================================
// Barbell Calculator
// ============================================================================

#[derive(Serialize)]
struct PlateReport {
    weight_kg: f64,
    display_weight: f64,
    color: PlateColor,
    css_class: &'static str,
}

fn plate_report(plate: &Plate, unit: UnitSystem) -> PlateReport {
    PlateReport {
        weight_kg: plate.weight_kg,
        display_weight: unit.display_weight(plate.weight_kg),
        color: plate.color,
        css_class: plate.color.css_class(),
    }
}

#[derive(Serialize)]
struct PlanReport {
    target_kg: f64,
    bar_weight_kg: f64,
    plates: Vec<PlateReport>,
    per_side_kg: f64,
    loaded_total_kg: f64,
    residual_kg: f64,
    is_exact: bool,
}

/// The standard plate catalog as JSON (metric display weights)
#[wasm_bindgen]
pub fn standard_plates_json() -> Result<String, String> {
    let catalog = PlateCatalog::standard();
    let plates: Vec<PlateReport> = catalog
        .plates()
        .iter()
        .map(|p| plate_report(p, UnitSystem::Metric))
        .collect();
    to_json(&plates)
}

/// Barbell widget handle
#[wasm_bindgen]
pub struct BarbellCalculator {
    inner: CoreBarbell,
}

impl Default for BarbellCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BarbellCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CoreBarbell::new(),
        }
    }

    /// Switch unit: "metric" or "imperial"
    pub fn set_unit(&mut self, unit: &str) -> Result<(), String> {
        let unit: UnitSystem = unit.parse()?;
        self.inner.set_unit(unit);
        Ok(())
    }

    pub fn unit(&self) -> String {
        match self.inner.unit() {
            UnitSystem::Metric => "metric".to_string(),
            UnitSystem::Imperial => "imperial".to_string(),
        }
    }

    /// Unit suffix shown next to weights: "kg" or "lb"
    pub fn unit_label(&self) -> String {
        self.inner.unit().abbreviation().to_string()
    }

    /// Switch input mode: "enterWeight" or "selectPlates"
    pub fn set_mode(&mut self, mode: &str) -> Result<(), String> {
        self.inner.set_mode(mode.parse()?);
        Ok(())
    }

    /// Feed the raw target field; empty text clears the target
    pub fn set_target_field(&mut self, raw: &str) -> Result<(), String> {
        let target = validation::parse_weight_field(raw).map_err(|e| e.to_string())?;
        self.inner.set_target(target);
        Ok(())
    }

    pub fn clear_target(&mut self) {
        self.inner.set_target(None);
    }

    /// Tap a catalog plate onto the bar; false for a bad index
    pub fn select_plate(&mut self, index: usize) -> bool {
        self.inner.select_plate(index).is_some()
    }

    pub fn reset_plates(&mut self) {
        self.inner.reset_plates();
    }

    pub fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    pub fn bar_weight_kg(&self) -> f64 {
        self.inner.bar_weight_kg()
    }

    /// Headline total in the current unit
    pub fn total_weight(&self) -> f64 {
        self.inner.total_weight()
    }

    /// Catalog with display weights for the rack buttons, as JSON
    pub fn display_plates_json(&self) -> Result<String, String> {
        let plates: Vec<PlateReport> = self
            .inner
            .display_plates()
            .iter()
            .map(|dp| PlateReport {
                weight_kg: dp.weight_kg,
                display_weight: dp.display_weight,
                color: dp.color,
                css_class: dp.color.css_class(),
            })
            .collect();
        to_json(&plates)
    }

    /// Currently tapped plates in display units, as JSON
    pub fn selected_plates_json(&self) -> Result<String, String> {
        let unit = self.inner.unit();
        let plates: Vec<PlateReport> = self
            .inner
            .selected()
            .iter()
            .map(|p| plate_report(p, unit))
            .collect();
        to_json(&plates)
    }

    /// Plates per side to reach the manual target, as JSON
    pub fn required_plates_json(&self) -> Result<String, String> {
        let unit = self.inner.unit();
        let plan = self.inner.required_plates();
        to_json(&PlanReport {
            target_kg: plan.target_kg,
            bar_weight_kg: plan.bar_weight_kg,
            plates: plan.plates.iter().map(|p| plate_report(p, unit)).collect(),
            per_side_kg: plan.per_side_kg(),
            loaded_total_kg: plan.loaded_total_kg(),
            residual_kg: plan.residual_kg(),
            is_exact: plan.is_exact(),
        })
    }
}

// ============================================================================
// Calorie Tracker
// ============================================================================

/// Calorie tracker widget handle
#[wasm_bindgen]
pub struct CalorieTracker {
    inner: CoreCalorieTracker,
}

impl Default for CalorieTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CalorieTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CoreCalorieTracker::new(),
        }
    }

    /// Log calories for a date; both arguments arrive as raw field text
    pub fn add_entry(&mut self, date: &str, calories: &str) -> Result<(), String> {
        let date = parse_date(date)?;
        let kcal = validation::parse_calories_field(calories).map_err(|e| e.to_string())?;
        self.inner.add_entry(date, kcal).map_err(|e| e.to_string())
    }

    pub fn entry_count(&self) -> usize {
        self.inner.entry_count()
    }

    pub fn week_count(&self) -> usize {
        self.inner.week_count()
    }

    pub fn expand_week(&mut self, index: usize) -> Result<(), String> {
        self.inner.expand_week(index).map_err(|e| e.to_string())
    }

    pub fn collapse(&mut self) {
        self.inner.collapse();
    }

    pub fn expanded_week(&self) -> Option<usize> {
        self.inner.expanded_week()
    }

    /// Chart series as JSON; `null` while nothing is logged
    pub fn chart_json(&self) -> Result<String, String> {
        to_json(&self.inner.chart())
    }

    /// One summary line per week, e.g. "Week 1: 2000 kcal"
    pub fn summary_lines(&self) -> Vec<String> {
        self.inner.summary_lines()
    }
}

// ============================================================================
// Lift Tracker
// ============================================================================

/// Lift tracker widget handle
#[wasm_bindgen]
pub struct LiftTracker {
    inner: CoreLiftTracker,
}

impl Default for LiftTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl LiftTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CoreLiftTracker::new(),
        }
    }

    /// Register a lift name from the form field
    pub fn create_lift(&mut self, name: &str) -> Result<(), String> {
        validation::validate_lift_name(name).map_err(|e| e.to_string())?;
        self.inner.create_lift(name).map_err(|e| e.to_string())
    }

    /// Log a set; date, weight and reps arrive as raw field text
    pub fn add_entry(
        &mut self,
        name: &str,
        date: &str,
        weight: &str,
        reps: &str,
    ) -> Result<(), String> {
        let date = parse_date(date)?;
        let weight_kg = validation::parse_lift_weight_field(weight).map_err(|e| e.to_string())?;
        let reps = validation::parse_reps_field(reps).map_err(|e| e.to_string())?;
        self.inner
            .add_entry(name, date, weight_kg, reps)
            .map_err(|e| e.to_string())
    }

    pub fn lift_count(&self) -> usize {
        self.inner.lift_count()
    }

    pub fn lift_names(&self) -> Vec<String> {
        self.inner
            .lift_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Latest entry of a lift as JSON; `null` when nothing is logged yet
    pub fn latest_entry_json(&self, name: &str) -> Result<String, String> {
        let lift = self
            .inner
            .lift(name)
            .ok_or_else(|| format!("Unknown lift: {}", name))?;
        to_json(&lift.latest_entry())
    }

    /// Progress chart for a lift as JSON
    pub fn chart_json(&self, name: &str) -> Result<String, String> {
        let series = self.inner.chart(name).map_err(|e| e.to_string())?;
        to_json(&series)
    }

    pub fn expand_week(&mut self, index: usize) -> Result<(), String> {
        self.inner.expand_week(index).map_err(|e| e.to_string())
    }

    pub fn collapse(&mut self) {
        self.inner.collapse();
    }

    pub fn expanded_week(&self) -> Option<usize> {
        self.inner.expanded_week()
    }
}
