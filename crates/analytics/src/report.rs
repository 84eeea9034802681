use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate figures for the rolls that were in the warehouse during a window.
///
/// Counts cover the whole window. Every other figure is taken over the
/// rolls whose lifespan overlaps the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatistics {
    // I. Movement
    pub added_count: usize,
    pub removed_count: usize,

    // II. Dimensions
    pub avg_length: f64,
    pub avg_weight: f64,
    pub max_length: f64,
    pub min_length: f64,
    pub max_weight: f64,
    pub min_weight: f64,
    pub total_weight: f64,

    // III. Lifespans of removed rolls; -1 means none were observed
    pub max_interval_days: i64,
    pub min_interval_days: i64,

    // IV. Extremal days (None when nothing was active)
    pub day_with_min_count: Option<NaiveDate>,
    pub day_with_max_count: Option<NaiveDate>,
    pub day_with_min_weight: Option<NaiveDate>,
    pub day_with_max_weight: Option<NaiveDate>,
}

impl PeriodStatistics {
    /// The report for a window in which no roll was active.
    pub fn new() -> Self {
        Self {
            added_count: 0,
            removed_count: 0,
            avg_length: 0.0,
            avg_weight: 0.0,
            max_length: 0.0,
            min_length: 0.0,
            max_weight: 0.0,
            min_weight: 0.0,
            total_weight: 0.0,
            max_interval_days: 0,
            min_interval_days: -1,
            day_with_min_count: None,
            day_with_max_count: None,
            day_with_min_weight: None,
            day_with_max_weight: None,
        }
    }
}

impl Default for PeriodStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// How many rolls, and how much weight, sat in the warehouse on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayOccupancy {
    pub date: NaiveDate,
    pub count: usize,
    pub weight: f64,
}
