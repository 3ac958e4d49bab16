//! FitBoard Core Library
//!
//! Pure computation behind the FitBoard dashboard widgets: barbell plate
//! math, BMI, calorie and lift tracking with weekly rollups. No I/O and
//! no rendering; the browser layer owns the DOM and calls in through the
//! WASM bindings.

pub mod barbell;
pub mod bmi;
pub mod calories;
pub mod chart;
pub mod errors;
pub mod lifts;
pub mod plates;
pub mod units;
pub mod validation;
pub mod weekly;

// Re-export commonly used items
pub use errors::*;
pub use units::*;

// Export widget state types
pub use barbell::{BarbellCalculator, DisplayPlate, LoadMode, DEFAULT_BAR_WEIGHT_KG};
pub use bmi::{calculate_bmi, calculate_bmi_result, classify_bmi, BmiCalculator, BmiCategory, BmiResult};
pub use calories::{CalorieEntry, CalorieTracker};
pub use chart::ChartSeries;
pub use lifts::{Lift, LiftEntry, LiftTracker};
pub use plates::{LoadPlan, Plate, PlateCatalog, PlateColor};
pub use weekly::{bucketize, week_start, weekly_aggregates, DatedValue, WeekBucket, WeeklyAggregate};
