//! Chart-ready series built from weekly buckets
//!
//! The trackers hand the rendering layer plain labels and values; axis
//! drawing, colors and tooltips stay in the frontend. Labels follow the
//! dashboard conventions: "Week N" for the collapsed view, "Day N" or the
//! entry date for a drilled-in week.

use serde::{Deserialize, Serialize};

use crate::weekly::{DatedValue, WeekBucket, WeeklyAggregate};

/// One plottable series: parallel label and value vectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Weekly averages labelled "Week 1".."Week N"
pub fn weekly_series(name: &str, aggregates: &[WeeklyAggregate]) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        labels: (1..=aggregates.len()).map(|n| format!("Week {}", n)).collect(),
        values: aggregates.iter().map(|agg| agg.average).collect(),
    }
}

/// Raw values of one week labelled "Day 1".."Day N"
pub fn daily_series<T: DatedValue>(name: &str, bucket: &WeekBucket<T>) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        labels: (1..=bucket.len()).map(|n| format!("Day {}", n)).collect(),
        values: bucket.entries.iter().map(|e| e.value()).collect(),
    }
}

/// Raw values of one week labelled with each entry's date
pub fn dated_series<T: DatedValue>(name: &str, bucket: &WeekBucket<T>) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        labels: bucket.entries.iter().map(|e| e.date().to_string()).collect(),
        values: bucket.entries.iter().map(|e| e.value()).collect(),
    }
}
