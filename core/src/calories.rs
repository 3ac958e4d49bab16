//! Calorie tracker widget state
//!
//! An append-only log of dated calorie entries with a weekly rollup and a
//! drill-down cursor. The cursor selects one week bucket for daily view;
//! it lives here rather than in the aggregation code because it is pure
//! presentation state (collapsing it never changes the stored entries).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::{self, ChartSeries};
use crate::errors::TrackerError;
use crate::validation;
use crate::weekly::{self, DatedValue, WeekBucket, WeeklyAggregate};

/// One logged day of calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieEntry {
    pub date: NaiveDate,
    pub kcal: f64,
}

impl DatedValue for CalorieEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn value(&self) -> f64 {
        self.kcal
    }
}

/// Calorie tracker state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalorieTracker {
    entries: Vec<CalorieEntry>,
    expanded_week: Option<usize>,
}

impl CalorieTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a calorie entry for a date
    ///
    /// New data changes the week layout, so any open drill-down collapses.
    pub fn add_entry(&mut self, date: NaiveDate, kcal: f64) -> Result<(), TrackerError> {
        validation::validate_calories(kcal)?;
        self.entries.push(CalorieEntry { date, kcal });
        self.expanded_week = None;
        tracing::debug!(%date, kcal, entry_count = self.entries.len(), "logged calorie entry");
        Ok(())
    }

    pub fn entries(&self) -> &[CalorieEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped into calendar weeks, oldest first
    pub fn weeks(&self) -> Vec<WeekBucket<CalorieEntry>> {
        weekly::bucketize(&self.entries)
    }

    pub fn week_count(&self) -> usize {
        self.weeks().len()
    }

    /// Per-week count/sum/average, oldest first
    pub fn aggregates(&self) -> Vec<WeeklyAggregate> {
        weekly::weekly_aggregates(&self.entries)
    }

    pub fn expanded_week(&self) -> Option<usize> {
        self.expanded_week
    }

    /// Open the daily view for week `index` (zero-based, oldest first)
    pub fn expand_week(&mut self, index: usize) -> Result<(), TrackerError> {
        let weeks = self.week_count();
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

    /// The raw entries of week `index`, chronological
    pub fn week_entries(&self, index: usize) -> Result<Vec<CalorieEntry>, TrackerError> {
        let weeks = self.weeks();
        let count = weeks.len();
        weeks
            .into_iter()
            .nth(index)
            .map(|bucket| bucket.entries)
            .ok_or(TrackerError::WeekOutOfRange {
                index,
                weeks: count,
            })
    }

    /// Series for the tracker chart, or `None` when nothing is logged
    ///
    /// Collapsed: weekly averages. Expanded: the selected week's daily
    /// values. A stale cursor falls back to the weekly view.
    pub fn chart(&self) -> Option<ChartSeries> {
        if self.entries.is_empty() {
            return None;
        }
        let weeks = self.weeks();
        match self.expanded_week {
            Some(index) if index < weeks.len() => {
                Some(chart::daily_series("Daily Calories", &weeks[index]))
            }
            _ => {
                let aggregates: Vec<WeeklyAggregate> =
                    weeks.iter().map(WeekBucket::aggregate).collect();
                Some(chart::weekly_series("Weekly Average Calories", &aggregates))
            }
        }
    }

    /// Summary list shown under the chart, one line per week
    pub fn summary_lines(&self) -> Vec<String> {
        self.aggregates()
            .iter()
            .enumerate()
            .map(|(index, agg)| format!("Week {}: {} kcal", index + 1, agg.average.round()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_entry_validates_calories() {
        let mut tracker = CalorieTracker::new();
        assert!(tracker.add_entry(date(2024, 1, 15), 2000.0).is_ok());
        assert!(tracker.add_entry(date(2024, 1, 16), -100.0).is_err());
        assert!(tracker.add_entry(date(2024, 1, 16), f64::NAN).is_err());
        // Rejected entries leave the log untouched
        assert_eq!(tracker.entry_count(), 1);
    }

    #[test]
    fn test_same_week_average() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();
        tracker.add_entry(date(2024, 1, 16), 2200.0).unwrap();
        tracker.add_entry(date(2024, 1, 17), 1800.0).unwrap();

        let aggregates = tracker.aggregates();
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].average, 2000.0);
        assert_eq!(tracker.summary_lines(), vec!["Week 1: 2000 kcal"]);
    }

    #[test]
    fn test_summary_lines_round_averages() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();
        tracker.add_entry(date(2024, 1, 16), 2100.0).unwrap();
        tracker.add_entry(date(2024, 1, 17), 1800.0).unwrap();
        // 5900 / 3 = 1966.67 -> rounds to 1967
        assert_eq!(tracker.summary_lines(), vec!["Week 1: 1967 kcal"]);
    }

    #[test]
    fn test_chart_is_none_when_empty() {
        let tracker = CalorieTracker::new();
        assert!(tracker.chart().is_none());
        assert!(tracker.summary_lines().is_empty());
    }

    #[test]
    fn test_collapsed_chart_shows_weekly_averages() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();
        tracker.add_entry(date(2024, 1, 22), 1800.0).unwrap();

        let series = tracker.chart().unwrap();
        assert_eq!(series.name, "Weekly Average Calories");
        assert_eq!(series.labels, vec!["Week 1", "Week 2"]);
        assert_eq!(series.values, vec![2000.0, 1800.0]);
    }

    #[test]
    fn test_expand_week_switches_to_daily_view() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();
        tracker.add_entry(date(2024, 1, 16), 2200.0).unwrap();
        tracker.add_entry(date(2024, 1, 22), 1800.0).unwrap();

        tracker.expand_week(0).unwrap();
        let series = tracker.chart().unwrap();
        assert_eq!(series.name, "Daily Calories");
        assert_eq!(series.labels, vec!["Day 1", "Day 2"]);
        assert_eq!(series.values, vec![2000.0, 2200.0]);
    }

    #[test]
    fn test_expand_week_out_of_range() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();

        let err = tracker.expand_week(5).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::WeekOutOfRange { index: 5, weeks: 1 }
        ));
        // Failed expand leaves the view collapsed
        assert_eq!(tracker.expanded_week(), None);
    }

    #[test]
    fn test_expand_collapse_round_trip() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();
        tracker.add_entry(date(2024, 1, 22), 1800.0).unwrap();

        let collapsed = tracker.chart().unwrap();
        tracker.expand_week(1).unwrap();
        assert_eq!(tracker.expanded_week(), Some(1));
        tracker.collapse();
        assert_eq!(tracker.chart().unwrap(), collapsed);
    }

    #[test]
    fn test_adding_entry_collapses_drill_down() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();
        tracker.expand_week(0).unwrap();

        tracker.add_entry(date(2024, 1, 22), 1800.0).unwrap();
        assert_eq!(tracker.expanded_week(), None);
    }

    #[test]
    fn test_week_entries_drill_down() {
        let mut tracker = CalorieTracker::new();
        tracker.add_entry(date(2024, 1, 16), 2200.0).unwrap();
        tracker.add_entry(date(2024, 1, 15), 2000.0).unwrap();

        let entries = tracker.week_entries(0).unwrap();
        assert_eq!(entries.len(), 2);
        // Chronological regardless of insertion order
        assert_eq!(entries[0].date, date(2024, 1, 15));
        assert!(tracker.week_entries(1).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every accepted entry is retained and the cursor
        /// always ends up collapsed after an append
        #[test]
        fn prop_appends_accumulate(values in prop::collection::vec(0.0f64..5000.0, 1..30)) {
            let mut tracker = CalorieTracker::new();
            let base = date(2024, 1, 7);
            for (i, kcal) in values.iter().enumerate() {
                tracker.add_entry(base + chrono::Duration::days(i as i64), *kcal).unwrap();
            }
            prop_assert_eq!(tracker.entry_count(), values.len());
            prop_assert_eq!(tracker.expanded_week(), None);
            prop_assert!(tracker.chart().is_some());
        }

        /// Property: weekly sums account for every logged calorie
        #[test]
        fn prop_aggregates_conserve_total(values in prop::collection::vec(0.0f64..5000.0, 1..30)) {
            let mut tracker = CalorieTracker::new();
            let base = date(2024, 1, 7);
            for (i, kcal) in values.iter().enumerate() {
                tracker.add_entry(base + chrono::Duration::days(i as i64), *kcal).unwrap();
            }
            let total: f64 = values.iter().sum();
            let bucketed: f64 = tracker.aggregates().iter().map(|agg| agg.sum).sum();
            prop_assert!((total - bucketed).abs() < 1e-6);
        }
    }
}
