//! Lift tracker widget state
//!
//! A registry of named lifts, each with its own append-only entry log.
//! Lifts keep creation order so the picker reads the way the user built
//! it. The drill-down cursor is shared across lifts; a lift with fewer
//! recorded weeks than the cursor simply falls back to its weekly view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::{self, ChartSeries};
use crate::errors::TrackerError;
use crate::validation;
use crate::weekly::{self, DatedValue, WeekBucket, WeeklyAggregate};

/// One recorded set of a lift
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub reps: u32,
}

impl DatedValue for LiftEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn value(&self) -> f64 {
        self.weight_kg
    }
}

/// A named lift with its entry log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lift {
    name: String,
    entries: Vec<LiftEntry>,
}

impl Lift {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[LiftEntry] {
        &self.entries
    }

    /// Most recent entry by date; among same-day entries, the last logged
    pub fn latest_entry(&self) -> Option<&LiftEntry> {
        self.entries.iter().max_by_key(|e| e.date)
    }

    /// Entries grouped into calendar weeks, oldest first
    pub fn weeks(&self) -> Vec<WeekBucket<LiftEntry>> {
        weekly::bucketize(&self.entries)
    }

    pub fn aggregates(&self) -> Vec<WeeklyAggregate> {
        weekly::weekly_aggregates(&self.entries)
    }
}

/// Lift tracker state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiftTracker {
    lifts: Vec<Lift>,
    expanded_week: Option<usize>,
}

impl LiftTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new lift name
    ///
    /// Names are trimmed, must be non-empty and must not collide with an
    /// existing lift (comparison is case-sensitive).
    pub fn create_lift(&mut self, name: &str) -> Result<(), TrackerError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        if self.lifts.iter().any(|lift| lift.name == trimmed) {
            return Err(TrackerError::DuplicateLift(trimmed.to_string()));
        }
        self.lifts.push(Lift::new(trimmed.to_string()));
        tracing::debug!(name = trimmed, lift_count = self.lifts.len(), "created lift");
        Ok(())
    }

    /// Append an entry to a lift's log
    ///
    /// New data changes the week layout, so any open drill-down collapses.
    pub fn add_entry(
        &mut self,
        name: &str,
        date: NaiveDate,
        weight_kg: f64,
        reps: u32,
    ) -> Result<(), TrackerError> {
        validation::validate_lift_weight_kg(weight_kg)?;
        validation::validate_reps(reps)?;
        let lift = self
            .lifts
            .iter_mut()
            .find(|lift| lift.name == name)
            .ok_or_else(|| TrackerError::UnknownLift(name.to_string()))?;
        lift.entries.push(LiftEntry {
            date,
            weight_kg,
            reps,
        });
        self.expanded_week = None;
        tracing::debug!(name, %date, weight_kg, reps, "recorded lift entry");
        Ok(())
    }

    /// Lifts in creation order
    pub fn lifts(&self) -> &[Lift] {
        &self.lifts
    }

    pub fn lift(&self, name: &str) -> Option<&Lift> {
        self.lifts.iter().find(|lift| lift.name == name)
    }

    pub fn lift_names(&self) -> Vec<&str> {
        self.lifts.iter().map(|lift| lift.name.as_str()).collect()
    }

    pub fn lift_count(&self) -> usize {
        self.lifts.len()
    }

    pub fn expanded_week(&self) -> Option<usize> {
        self.expanded_week
    }

    /// Open the daily view for week `index` (zero-based, oldest first)
    ///
    /// The index is validated against the longest history among all
    /// lifts, since the cursor applies to whichever lift is displayed.
    pub fn expand_week(&mut self, index: usize) -> Result<(), TrackerError> {
        let weeks = self
            .lifts
            .iter()
            .map(|lift| lift.weeks().len())
            .max()
            .unwrap_or(0);
        if index >= weeks {
            return Err(TrackerError::WeekOutOfRange { index, weeks });
        }
        self.expanded_week = Some(index);
        Ok(())
    }

    /// Return to the weekly overview
    pub fn collapse(&mut self) {
        self.expanded_week = None;
    }

    /// Series for one lift's progress chart
    ///
    /// Collapsed: weekly average weight. Expanded: the selected week's
    /// entries labelled by date. A cursor beyond this lift's history
    /// falls back to the weekly view rather than erroring.
    pub fn chart(&self, name: &str) -> Result<ChartSeries, TrackerError> {
        let lift = self
            .lift(name)
            .ok_or_else(|| TrackerError::UnknownLift(name.to_string()))?;
        let weeks = lift.weeks();
        match self.expanded_week {
            Some(index) if index < weeks.len() => {
                Ok(chart::dated_series("Daily Weight (kg)", &weeks[index]))
            }
            _ => Ok(chart::weekly_series(
                "Weekly Average Weight (kg)",
                &lift.aggregates(),
            )),
        }
    }
}
