use crate::error::AnalyticsError;
use crate::report::{DayOccupancy, PeriodStatistics};
use chrono::NaiveDate;
use core_types::Roll;
use database::RollStore;

/// A stateless calculator for inventory statistics over a date window.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatisticsEngine {}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating period statistics.
    ///
    /// # Arguments
    ///
    /// * `store` - The roll store to read the window's snapshots from.
    /// * `start`, `end` - The inclusive window.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PeriodStatistics` or an `AnalyticsError`.
    /// Fails with `AnalyticsError::InvalidRange` when `start > end`.
    pub async fn compute(
        &self,
        store: &dyn RollStore,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodStatistics, AnalyticsError> {
        if start > end {
            return Err(AnalyticsError::InvalidRange { start, end });
        }

        let (added, removed, active) = tokio::try_join!(
            store.find_added_between(start, end),
            store.find_removed_between(start, end),
            store.find_active_between(start, end),
        )?;

        // The day scan is CPU-bound and grows with the window length.
        let engine = *self;
        let report = tokio::task::spawn_blocking(move || {
            engine.summarize(start, end, added.len(), removed.len(), &active)
        })
        .await?;
        Ok(report)
    }

    /// Builds the report from already fetched snapshots.
    ///
    /// `active` must hold the rolls whose lifespan overlaps `[start, end]`.
    pub fn summarize(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        added_count: usize,
        removed_count: usize,
        active: &[Roll],
    ) -> PeriodStatistics {
        if active.is_empty() {
            // Nothing was on the shelf, so there are no extremal days either.
            return PeriodStatistics {
                added_count,
                removed_count,
                ..PeriodStatistics::new()
            };
        }

        let mut report = PeriodStatistics {
            added_count,
            removed_count,
            ..PeriodStatistics::new()
        };
        self.calculate_dimensions(active, &mut report);
        self.calculate_lifespans(active, &mut report);
        self.calculate_extremal_days(start, end, active, &mut report);
        report
    }

    /// Per-day count and total weight of rolls on the shelf, `start..=end`.
    ///
    /// Days are produced lazily; every day walks the whole `active` slice.
    pub fn occupancy<'a>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        active: &'a [Roll],
    ) -> impl Iterator<Item = DayOccupancy> + 'a {
        start.iter_days().take_while(move |day| *day <= end).map(move |date| {
            let (count, weight) = active
                .iter()
                .filter(|r| r.is_active_on(date))
                .fold((0, 0.0), |(count, weight), r| (count + 1, weight + r.weight));
            DayOccupancy { date, count, weight }
        })
    }

    /// Averages, extremes and the total of length and weight.
    fn calculate_dimensions(&self, active: &[Roll], report: &mut PeriodStatistics) {
        let mut total_length = 0.0;
        let mut total_weight = 0.0;
        let mut max_length = f64::NEG_INFINITY;
        let mut min_length = f64::INFINITY;
        let mut max_weight = f64::NEG_INFINITY;
        let mut min_weight = f64::INFINITY;

        for roll in active {
            total_length += roll.length;
            total_weight += roll.weight;
            max_length = max_length.max(roll.length);
            min_length = min_length.min(roll.length);
            max_weight = max_weight.max(roll.weight);
            min_weight = min_weight.min(roll.weight);
        }

        let n = active.len() as f64;
        report.avg_length = total_length / n;
        report.avg_weight = total_weight / n;
        report.max_length = max_length;
        report.min_length = min_length;
        report.max_weight = max_weight;
        report.min_weight = min_weight;
        report.total_weight = total_weight;
    }

    /// Longest and shortest stay among the active rolls that were removed.
    fn calculate_lifespans(&self, active: &[Roll], report: &mut PeriodStatistics) {
        let lifespans = active
            .iter()
            .filter_map(Roll::lifespan_days)
            .fold(None, |acc: Option<(i64, i64)>, days| match acc {
                None => Some((days, days)),
                Some((max, min)) => Some((max.max(days), min.min(days))),
            });

        // Leaves the (0, -1) sentinel when no active roll has been removed.
        if let Some((max, min)) = lifespans {
            report.max_interval_days = max;
            report.min_interval_days = min;
        }
    }

    /// Days with the fewest/most rolls and the lightest/heaviest load.
    ///
    /// Ties go to the earliest day.
    fn calculate_extremal_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        active: &[Roll],
        report: &mut PeriodStatistics,
    ) {
        let mut days = self.occupancy(start, end, active);
        let Some(first) = days.next() else {
            return;
        };

        let (mut min_count, mut max_count) = (first, first);
        let (mut min_weight, mut max_weight) = (first, first);
        for day in days {
            if day.count < min_count.count {
                min_count = day;
            }
            if day.count > max_count.count {
                max_count = day;
            }
            if day.weight < min_weight.weight {
                min_weight = day;
            }
            if day.weight > max_weight.weight {
                max_weight = day;
            }
        }

        report.day_with_min_count = Some(min_count.date);
        report.day_with_max_count = Some(max_count.date);
        report.day_with_min_weight = Some(min_weight.date);
        report.day_with_max_weight = Some(max_weight.date);
    }
}
