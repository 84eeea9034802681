use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identifier assigned to a roll by the store.
pub type RollId = i32;

/// A single roll of metal tracked by the warehouse.
///
/// `date_removed` is `None` while the roll is in stock. Removal is a soft
/// delete: the record is kept and only the date is stamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Roll {
    pub id: RollId,
    pub length: f64,
    pub weight: f64,
    pub date_added: NaiveDate,
    pub date_removed: Option<NaiveDate>,
}

impl Roll {
    /// Whether the roll sits on the shelf during `day`.
    ///
    /// A roll added on `day` counts; a roll removed on `day` does not.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.date_added <= day && self.date_removed.is_none_or(|removed| removed > day)
    }

    /// Whether any part of the roll's lifespan overlaps `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date_added <= end && self.date_removed.is_none_or(|removed| removed >= start)
    }

    /// Whole days between adding and removal, if the roll has been removed.
    pub fn lifespan_days(&self) -> Option<i64> {
        self.date_removed
            .map(|removed| (removed - self.date_added).num_days())
    }

    pub fn is_removed(&self) -> bool {
        self.date_removed.is_some()
    }
}

/// The data needed to store a new roll. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoll {
    pub length: f64,
    pub weight: f64,
    pub date_added: NaiveDate,
}

impl NewRoll {
    /// Builds a new roll payload, rejecting non-positive dimensions.
    pub fn new(length: f64, weight: f64, date_added: NaiveDate) -> Result<Self, CoreError> {
        // `!(x > 0.0)` also rejects NaN.
        if !(length > 0.0) || !(weight > 0.0) {
            return Err(CoreError::InvalidInput(
                "roll".to_string(),
                "Length and weight must be positive numbers.".to_string(),
            ));
        }
        Ok(Self {
            length,
            weight,
            date_added,
        })
    }

    /// Attaches the id handed out by the store.
    pub fn into_roll(self, id: RollId) -> Roll {
        Roll {
            id,
            length: self.length,
            weight: self.weight,
            date_added: self.date_added,
            date_removed: None,
        }
    }
}
