//! Plate denominations and load resolution for the barbell widget
//!
//! Resolution answers one question: given a target bar weight, which
//! plates go on each side? The resolver is greedy largest-first over the
//! catalog. Greedy is not optimal for arbitrary denominations, but for
//! gym plate sets it matches what a lifter does at the rack and it keeps
//! the result stable and explainable.
//!
//! All resolution happens in kilograms. Display conversion is layered on
//! top by [`crate::units::UnitSystem`], never mixed into the math.

use serde::{Deserialize, Serialize};

// ============================================================================
// Plate Types
// ============================================================================

/// Competition-style plate colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateColor {
    Red,
    Blue,
    Yellow,
    Green,
    White,
    Black,
    Silver,
}

impl PlateColor {
    /// CSS classes the plate badge is rendered with
    pub fn css_class(&self) -> &'static str {
        match self {
            PlateColor::Red => "bg-red-500",
            PlateColor::Blue => "bg-blue-500",
            PlateColor::Yellow => "bg-yellow-500",
            PlateColor::Green => "bg-green-500",
            PlateColor::White => "bg-gray-100 text-black",
            PlateColor::Black => "bg-gray-800 text-white",
            PlateColor::Silver => "bg-gray-400 text-black",
        }
    }
}

/// A single plate denomination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub weight_kg: f64,
    pub color: PlateColor,
}

impl Plate {
    pub fn new(weight_kg: f64, color: PlateColor) -> Self {
        Self { weight_kg, color }
    }
}

// ============================================================================
// Plate Catalog
// ============================================================================

/// The plate denominations available on the rack
///
/// Plates are held sorted heaviest-first; the constructor normalizes
/// whatever order the caller supplies and drops non-positive or
/// non-finite weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateCatalog {
    plates: Vec<Plate>,
}

impl PlateCatalog {
    pub fn new(mut plates: Vec<Plate>) -> Self {
        plates.retain(|p| p.weight_kg.is_finite() && p.weight_kg > 0.0);
        plates.sort_by(|a, b| {
            b.weight_kg
                .partial_cmp(&a.weight_kg)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { plates }
    }

    /// The standard metric rack: 25 down to 1.25 kg
    pub fn standard() -> Self {
        Self::new(vec![
            Plate::new(25.0, PlateColor::Red),
            Plate::new(20.0, PlateColor::Blue),
            Plate::new(15.0, PlateColor::Yellow),
            Plate::new(10.0, PlateColor::Green),
            Plate::new(5.0, PlateColor::White),
            Plate::new(2.5, PlateColor::Black),
            Plate::new(1.25, PlateColor::Silver),
        ])
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn get(&self, index: usize) -> Option<&Plate> {
        self.plates.get(index)
    }

    pub fn smallest(&self) -> Option<&Plate> {
        self.plates.last()
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// Resolve the plates needed on each side to reach `target_kg`
    ///
    /// Walks the catalog heaviest-first, taking as many of each
    /// denomination as fit in the remaining weight. Each plate taken is
    /// mirrored on the other side, so a denomination consumes twice its
    /// weight from the remainder. Targets at or below the bar resolve to
    /// an empty plan; targets not expressible in the catalog leave a
    /// residual smaller than one pair of the smallest plate.
    pub fn resolve(&self, target_kg: f64, bar_weight_kg: f64) -> LoadPlan {
        let mut plan = LoadPlan {
            target_kg,
            bar_weight_kg,
            plates: Vec::new(),
        };
        let mut remaining = target_kg - bar_weight_kg;
        if !remaining.is_finite() || remaining <= 0.0 {
            return plan;
        }
        for plate in &self.plates {
            let pair_weight = plate.weight_kg * 2.0;
            let count = (remaining / pair_weight).floor() as usize;
            if count > 0 {
                for _ in 0..count {
                    plan.plates.push(*plate);
                }
                remaining -= count as f64 * pair_weight;
            }
        }
        tracing::debug!(
            target_kg,
            bar_weight_kg,
            plate_count = plan.plates.len(),
            "resolved plate load"
        );
        plan
    }
}

impl Default for PlateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Load Plan
// ============================================================================

/// Result of resolving a target weight into plates
///
/// `plates` holds one side of the bar, heaviest first. The loaded bar
/// carries the mirror image on the other side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadPlan {
    pub target_kg: f64,
    pub bar_weight_kg: f64,
    pub plates: Vec<Plate>,
}

impl LoadPlan {
    /// Total plate weight on one side
    pub fn per_side_kg(&self) -> f64 {
        self.plates.iter().map(|p| p.weight_kg).sum()
    }

    /// Bar plus both sides
    pub fn loaded_total_kg(&self) -> f64 {
        self.bar_weight_kg + 2.0 * self.per_side_kg()
    }

    /// Weight the plan falls short of the target
    pub fn residual_kg(&self) -> f64 {
        (self.target_kg - self.loaded_total_kg()).max(0.0)
    }

    /// Whether the plan hits the target exactly (within float tolerance)
    pub fn is_exact(&self) -> bool {
        self.residual_kg() < 1e-9
    }

    pub fn plate_count(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}
