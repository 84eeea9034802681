use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::roll::RollId;

/// An inclusive range over a single roll attribute.
///
/// Either end may be missing; the range only takes part in filtering when
/// both are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub from: Option<T>,
    pub to: Option<T>,
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self { from: None, to: None }
    }
}

impl<T: Copy> Range<T> {
    pub fn new(from: Option<T>, to: Option<T>) -> Self {
        Self { from, to }
    }

    pub fn between(from: T, to: T) -> Self {
        Self::new(Some(from), Some(to))
    }

    /// Both bounds, or `None` if the range is only partially specified.
    pub fn bounds(&self) -> Option<(T, T)> {
        self.from.zip(self.to)
    }

    pub fn is_active(&self) -> bool {
        self.bounds().is_some()
    }
}

/// Optional per-field ranges used to narrow down a listing of rolls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub id: Range<RollId>,
    pub length: Range<f64>,
    pub weight: Range<f64>,
    pub date_added: Range<NaiveDate>,
    pub date_removed: Range<NaiveDate>,
}

impl RangeFilter {
    /// True when no field has both bounds set.
    pub fn is_empty(&self) -> bool {
        !(self.id.is_active()
            || self.length.is_active()
            || self.weight.is_active()
            || self.date_added.is_active()
            || self.date_removed.is_active())
    }
}
