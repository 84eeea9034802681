use crate::error::AnalyticsError;
use chrono::NaiveDate;
use core_types::{Range, RangeFilter, Roll, RollId};

/// A stateless filter over the roll collection.
#[derive(Debug, Default)]
pub struct FilterEngine {}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the rolls that satisfy every active range in `filter`.
    ///
    /// A range is active only when both of its bounds are set; partially set
    /// ranges are neither validated nor applied. Order is preserved.
    pub fn apply(&self, rolls: Vec<Roll>, filter: &RangeFilter) -> Result<Vec<Roll>, AnalyticsError> {
        let bounds = ActiveBounds::validate(filter)?;
        if filter.is_empty() {
            return Ok(rolls);
        }
        Ok(rolls.into_iter().filter(|r| bounds.admits(r)).collect())
    }
}

/// The validated, fully specified ranges of a `RangeFilter`.
#[derive(Debug, Default)]
struct ActiveBounds {
    id: Option<(RollId, RollId)>,
    length: Option<(f64, f64)>,
    weight: Option<(f64, f64)>,
    date_added: Option<(NaiveDate, NaiveDate)>,
    date_removed: Option<(NaiveDate, NaiveDate)>,
}

impl ActiveBounds {
    fn validate(filter: &RangeFilter) -> Result<Self, AnalyticsError> {
        let id = filter.id.bounds();
        if let Some((from, to)) = id {
            if from <= 0 || to <= 0 {
                return Err(invalid("Id must be positive numbers."));
            }
        }

        let length = non_negative(&filter.length, "Length must be positive numbers.")?;
        let weight = non_negative(&filter.weight, "Weight must be positive numbers.")?;

        let date_added = ordered(
            &filter.date_added,
            "The start date of adding cannot be later than the end date.",
        )?;
        let date_removed = ordered(
            &filter.date_removed,
            "The deletion start date cannot be later than the end date.",
        )?;

        Ok(Self {
            id,
            length,
            weight,
            date_added,
            date_removed,
        })
    }

    fn admits(&self, roll: &Roll) -> bool {
        within(self.id, roll.id)
            && within(self.length, roll.length)
            && within(self.weight, roll.weight)
            && within(self.date_added, roll.date_added)
            // A roll still in stock never matches a removal-date range.
            && self
                .date_removed
                .is_none_or(|range| roll.date_removed.is_some_and(|d| within(Some(range), d)))
    }
}

fn within<T: PartialOrd>(range: Option<(T, T)>, value: T) -> bool {
    range.is_none_or(|(from, to)| value >= from && value <= to)
}

fn non_negative(range: &Range<f64>, message: &str) -> Result<Option<(f64, f64)>, AnalyticsError> {
    match range.bounds() {
        Some((from, to)) if from < 0.0 || to < 0.0 => Err(invalid(message)),
        bounds => Ok(bounds),
    }
}

fn ordered(
    range: &Range<NaiveDate>,
    message: &str,
) -> Result<Option<(NaiveDate, NaiveDate)>, AnalyticsError> {
    match range.bounds() {
        Some((from, to)) if from > to => Err(invalid(message)),
        bounds => Ok(bounds),
    }
}

fn invalid(message: &str) -> AnalyticsError {
    AnalyticsError::InvalidFilter(message.to_string())
}
