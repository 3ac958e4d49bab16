//! Barbell widget state: unit toggle, input mode, plate selection and
//! required-plate resolution
//!
//! The widget has two ways to arrive at a bar weight: type the target
//! total, or tap plates onto the bar. A manually entered target always
//! wins over the tapped plates. The bar itself is canonically 20 kg and
//! stays in kilograms whatever the display unit; resolution runs in kg
//! and only the rendered numbers are converted.

use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::plates::{LoadPlan, Plate, PlateCatalog, PlateColor};
use crate::units::UnitSystem;

/// Standard bar weight in kilograms
pub const DEFAULT_BAR_WEIGHT_KG: f64 = 20.0;

/// Which input the widget is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LoadMode {
    #[default]
    EnterWeight,
    SelectPlates,
}

impl std::str::FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enterweight" | "enter_weight" => Ok(LoadMode::EnterWeight),
            "selectplates" | "select_plates" => Ok(LoadMode::SelectPlates),
            _ => Err(format!("Unknown load mode: {}", s)),
        }
    }
}

/// A catalog plate carrying its user-facing weight for the rack buttons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPlate {
    pub weight_kg: f64,
    pub display_weight: f64,
    pub color: PlateColor,
}

/// Barbell widget state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarbellCalculator {
    unit: UnitSystem,
    mode: LoadMode,
    bar_weight_kg: f64,
    /// Manually entered target, kept at face value in the current unit
    target: Option<f64>,
    selected: Vec<Plate>,
    catalog: PlateCatalog,
}

impl Default for BarbellCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BarbellCalculator {
    pub fn new() -> Self {
        Self::with_catalog(PlateCatalog::standard())
    }

    pub fn with_catalog(catalog: PlateCatalog) -> Self {
        Self {
            unit: UnitSystem::Metric,
            mode: LoadMode::EnterWeight,
            bar_weight_kg: DEFAULT_BAR_WEIGHT_KG,
            target: None,
            selected: Vec::new(),
            catalog,
        }
    }

    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn bar_weight_kg(&self) -> f64 {
        self.bar_weight_kg
    }

    /// The manual target as typed, in the current unit
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    pub fn selected(&self) -> &[Plate] {
        &self.selected
    }

    pub fn catalog(&self) -> &PlateCatalog {
        &self.catalog
    }

    /// Switch display unit; the bar snaps back to the standard 20 kg
    pub fn set_unit(&mut self, unit: UnitSystem) {
        self.unit = unit;
        self.bar_weight_kg = DEFAULT_BAR_WEIGHT_KG;
    }

    /// Switch input mode; entering weight mode starts with a blank target
    pub fn set_mode(&mut self, mode: LoadMode) {
        self.mode = mode;
        if mode == LoadMode::EnterWeight {
            self.target = None;
        }
    }

    /// Store a parsed target (`None` clears it)
    pub fn set_target(&mut self, target: Option<f64>) {
        self.target = target;
    }

    pub fn set_bar_weight_kg(&mut self, bar_weight_kg: f64) -> Result<(), InputError> {
        if !bar_weight_kg.is_finite() {
            return Err(InputError::NotNumeric("bar weight"));
        }
        if bar_weight_kg <= 0.0 || bar_weight_kg > 100.0 {
            return Err(InputError::OutOfRange(
                "bar weight",
                "must be between 0 and 100 kg".to_string(),
            ));
        }
        self.bar_weight_kg = bar_weight_kg;
        Ok(())
    }

    /// Tap a catalog plate onto the bar (by catalog index)
    ///
    /// The same denomination can be tapped any number of times. Returns
    /// the plate added, or `None` for an index outside the catalog.
    pub fn select_plate(&mut self, index: usize) -> Option<Plate> {
        let plate = *self.catalog.get(index)?;
        self.selected.push(plate);
        Some(plate)
    }

    /// Take all tapped plates off the bar
    pub fn reset_plates(&mut self) {
        self.selected.clear();
    }

    /// Clear the manual target and all tapped plates
    pub fn reset_all(&mut self) {
        self.target = None;
        self.selected.clear();
    }

    /// The manual target converted to kilograms
    pub fn target_kg(&self) -> Option<f64> {
        self.target.map(|value| self.unit.to_kg(value))
    }

    /// Plates needed per side to reach the manual target
    ///
    /// Resolution always runs in kilogram space, so the same target
    /// loads the same plates whichever unit it was typed in. Without a
    /// target the plan is empty.
    pub fn required_plates(&self) -> LoadPlan {
        match self.target_kg() {
            Some(target_kg) => self.catalog.resolve(target_kg, self.bar_weight_kg),
            None => LoadPlan {
                target_kg: 0.0,
                bar_weight_kg: self.bar_weight_kg,
                plates: Vec::new(),
            },
        }
    }

    /// The headline total in the current unit's display space
    ///
    /// A manual target is echoed back exactly as typed. Otherwise the
    /// total is bar plus both sides of tapped plates, display-rounded.
    pub fn total_weight(&self) -> f64 {
        if let Some(target) = self.target {
            return target;
        }
        let per_side: f64 = self.selected.iter().map(|p| p.weight_kg).sum();
        self.unit
            .display_weight(self.bar_weight_kg + 2.0 * per_side)
    }

    /// The catalog with per-plate display weights for the rack buttons
    pub fn display_plates(&self) -> Vec<DisplayPlate> {
        self.catalog
            .plates()
            .iter()
            .map(|plate| DisplayPlate {
                weight_kg: plate.weight_kg,
                display_weight: self.unit.display_weight(plate.weight_kg),
                color: plate.color,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plan_weights(plan: &LoadPlan) -> Vec<f64> {
        plan.plates.iter().map(|p| p.weight_kg).collect()
    }

    #[test]
    fn test_defaults() {
        let calc = BarbellCalculator::new();
        assert_eq!(calc.unit(), UnitSystem::Metric);
        assert_eq!(calc.mode(), LoadMode::EnterWeight);
        assert_eq!(calc.bar_weight_kg(), DEFAULT_BAR_WEIGHT_KG);
        assert_eq!(calc.target(), None);
        assert!(calc.selected().is_empty());
        // Bare bar in metric reads as 20
        assert_eq!(calc.total_weight(), 20.0);
    }

    #[test]
    fn test_unit_switch_resets_bar() {
        let mut calc = BarbellCalculator::new();
        calc.set_bar_weight_kg(25.0).unwrap();
        calc.set_unit(UnitSystem::Imperial);
        assert_eq!(calc.bar_weight_kg(), DEFAULT_BAR_WEIGHT_KG);
        // The 20 kg bar displays as 45 lb
        assert_eq!(calc.total_weight(), 45.0);
    }

    #[test]
    fn test_entering_weight_mode_blanks_target() {
        let mut calc = BarbellCalculator::new();
        calc.set_target(Some(100.0));
        calc.set_mode(LoadMode::SelectPlates);
        assert_eq!(calc.target(), Some(100.0));
        calc.set_mode(LoadMode::EnterWeight);
        assert_eq!(calc.target(), None);
    }

    #[test]
    fn test_manual_target_wins_over_plates() {
        let mut calc = BarbellCalculator::new();
        calc.select_plate(0);
        calc.select_plate(0);
        calc.set_target(Some(100.0));
        assert_eq!(calc.total_weight(), 100.0);
    }

    #[test]
    fn test_selected_plate_total_metric() {
        let mut calc = BarbellCalculator::new();
        calc.select_plate(0); // 25 kg
        calc.select_plate(3); // 10 kg
        // 20 + 2 * (25 + 10)
        assert_eq!(calc.total_weight(), 90.0);
    }

    #[test]
    fn test_selected_plate_total_imperial_rounds_once() {
        let mut calc = BarbellCalculator::new();
        calc.set_unit(UnitSystem::Imperial);
        calc.select_plate(0); // 25 kg
        calc.select_plate(3); // 10 kg
        // 90 kg -> 198.4158 lb, ceiled once at the end
        assert_eq!(calc.total_weight(), 199.0);
    }

    #[test]
    fn test_select_plate_out_of_range() {
        let mut calc = BarbellCalculator::new();
        assert!(calc.select_plate(99).is_none());
        assert!(calc.selected().is_empty());
    }

    #[test]
    fn test_required_plates_metric() {
        let mut calc = BarbellCalculator::new();
        calc.set_target(Some(100.0));
        let plan = calc.required_plates();
        assert_eq!(plan_weights(&plan), vec![25.0, 15.0]);
        assert!(plan.is_exact());
    }

    #[test]
    fn test_required_plates_resolve_in_kg_for_imperial() {
        let mut calc = BarbellCalculator::new();
        calc.set_unit(UnitSystem::Imperial);
        calc.set_target(Some(220.0)); // pounds
        // 220 lb = 99.79 kg; greedy in kg space lands on 97.5 kg loaded
        let plan = calc.required_plates();
        assert_eq!(plan_weights(&plan), vec![25.0, 10.0, 2.5, 1.25]);
        assert!(plan.loaded_total_kg() <= 99.8);
    }

    #[test]
    fn test_required_plates_empty_without_target() {
        let calc = BarbellCalculator::new();
        assert!(calc.required_plates().is_empty());
    }

    #[test]
    fn test_display_plates_follow_unit() {
        let mut calc = BarbellCalculator::new();
        let metric: Vec<f64> = calc.display_plates().iter().map(|p| p.display_weight).collect();
        assert_eq!(metric, vec![25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25]);

        calc.set_unit(UnitSystem::Imperial);
        let imperial: Vec<f64> = calc.display_plates().iter().map(|p| p.display_weight).collect();
        assert_eq!(imperial, vec![56.0, 45.0, 34.0, 23.0, 12.0, 6.0, 3.0]);
    }

    #[test]
    fn test_resets() {
        let mut calc = BarbellCalculator::new();
        calc.set_target(Some(80.0));
        calc.select_plate(2);
        calc.reset_plates();
        assert!(calc.selected().is_empty());
        assert_eq!(calc.target(), Some(80.0));

        calc.select_plate(2);
        calc.reset_all();
        assert!(calc.selected().is_empty());
        assert_eq!(calc.target(), None);
    }

    #[test]
    fn test_set_bar_weight_validates() {
        let mut calc = BarbellCalculator::new();
        assert!(calc.set_bar_weight_kg(15.0).is_ok());
        assert_eq!(calc.bar_weight_kg(), 15.0);
        assert!(calc.set_bar_weight_kg(0.0).is_err());
        assert!(calc.set_bar_weight_kg(f64::NAN).is_err());
        assert!(calc.set_bar_weight_kg(500.0).is_err());
        assert_eq!(calc.bar_weight_kg(), 15.0);
    }

    #[test]
    fn test_load_mode_parsing() {
        assert_eq!("enterWeight".parse::<LoadMode>().unwrap(), LoadMode::EnterWeight);
        assert_eq!("select_plates".parse::<LoadMode>().unwrap(), LoadMode::SelectPlates);
        assert!("lift".parse::<LoadMode>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: a manual target is echoed back exactly, plates or not
        #[test]
        fn prop_manual_target_echoed(target in 1.0f64..500.0, taps in 0usize..5) {
            let mut calc = BarbellCalculator::new();
            for _ in 0..taps {
                calc.select_plate(0);
            }
            calc.set_target(Some(target));
            prop_assert_eq!(calc.total_weight(), target);
        }

        /// Property: the imperial plate total never reads under the exact
        /// conversion and resolution stays within the target
        #[test]
        fn prop_imperial_totals_consistent(target_lbs in 50.0f64..500.0) {
            let mut calc = BarbellCalculator::new();
            calc.set_unit(UnitSystem::Imperial);
            calc.set_target(Some(target_lbs));
            let plan = calc.required_plates();
            let target_kg = calc.target_kg().unwrap();
            prop_assert!(plan.loaded_total_kg() <= target_kg + 1e-6);
        }
    }
}
