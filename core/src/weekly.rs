//! Calendar-week bucketing shared by the calorie and lift trackers
//!
//! Entries are grouped into calendar weeks anchored on Sunday, not into
//! rolling seven-entry windows, so a week with three logged days averages
//! over three samples. Buckets come out in chronological order and every
//! bucket holds at least one entry. Entries sharing a date keep their
//! insertion order (the sort is stable).

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A dated numeric sample that can be bucketed by week
pub trait DatedValue {
    fn date(&self) -> NaiveDate;
    fn value(&self) -> f64;
}

/// The Sunday that starts the calendar week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_sunday = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(days_from_sunday)
}

/// One calendar week of entries, in chronological order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket<T> {
    pub week_start: NaiveDate,
    pub entries: Vec<T>,
}

impl<T: DatedValue> WeekBucket<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|e| e.value()).sum()
    }

    /// Mean of the entry values
    ///
    /// Buckets built by [`bucketize`] always hold at least one entry;
    /// an empty bucket reads as zero rather than dividing by zero.
    pub fn average(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.sum() / self.entries.len() as f64
    }

    pub fn aggregate(&self) -> WeeklyAggregate {
        WeeklyAggregate {
            week_start: self.week_start,
            count: self.entries.len(),
            sum: self.sum(),
            average: self.average(),
        }
    }
}

/// Summary statistics for one calendar week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    pub week_start: NaiveDate,
    pub count: usize,
    pub sum: f64,
    pub average: f64,
}

/// Group entries into calendar-week buckets, oldest week first
///
/// The input may arrive in any order; it is sorted by date (stable)
/// before grouping, so the same entries always produce the same buckets.
pub fn bucketize<T: DatedValue + Clone>(entries: &[T]) -> Vec<WeekBucket<T>> {
    let mut sorted: Vec<T> = entries.to_vec();
    sorted.sort_by_key(|e| e.date());

    let mut buckets: Vec<WeekBucket<T>> = Vec::new();
    for entry in sorted {
        let start = week_start(entry.date());
        match buckets.last_mut() {
            Some(bucket) if bucket.week_start == start => bucket.entries.push(entry),
            _ => buckets.push(WeekBucket {
                week_start: start,
                entries: vec![entry],
            }),
        }
    }
    buckets
}

/// Convenience: bucketize and aggregate in one pass
pub fn weekly_aggregates<T: DatedValue + Clone>(entries: &[T]) -> Vec<WeeklyAggregate> {
    bucketize(entries).iter().map(WeekBucket::aggregate).collect()
}
