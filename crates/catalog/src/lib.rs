use analytics::{FilterEngine, PeriodStatistics, StatisticsEngine};
use chrono::NaiveDate;
use core_types::{NewRoll, RangeFilter, Roll, RollId};
use database::RollStore;
use std::sync::Arc;

pub mod clock;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CatalogError;

/// The inventory's front door: add, remove, list and report on rolls.
///
/// Input is validated here before the store is touched.
pub struct RollCatalog {
    store: Arc<dyn RollStore>,
    clock: Arc<dyn Clock>,
    filters: FilterEngine,
    statistics: StatisticsEngine,
}

impl RollCatalog {
    pub fn new(store: Arc<dyn RollStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            filters: FilterEngine::new(),
            statistics: StatisticsEngine::new(),
        }
    }

    /// A catalog stamping dates from the host clock.
    pub fn with_system_clock(store: Arc<dyn RollStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// Adds a roll received today.
    pub async fn add(&self, length: f64, weight: f64) -> Result<Roll, CatalogError> {
        let roll = NewRoll::new(length, weight, self.clock.today())?;
        Ok(self.store.insert(roll).await?)
    }

    /// Marks a roll as removed today. The record itself is kept.
    ///
    /// Removing a roll that is already gone returns it unchanged, so the
    /// first removal date is never overwritten.
    pub async fn remove(&self, id: RollId) -> Result<Roll, CatalogError> {
        if id <= 0 {
            return Err(CatalogError::InvalidRollData(
                "Id must be positive numbers.".to_string(),
            ));
        }

        let mut roll = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::RollNotFound(id))?;
        if roll.is_removed() {
            return Ok(roll);
        }

        roll.date_removed = Some(self.clock.today());
        let saved = self.store.update(&roll).await.map_err(|e| match e {
            // The roll vanished between the lookup and the update.
            database::DbError::NotFound(id) => CatalogError::RollNotFound(id),
            other => CatalogError::Store(other),
        })?;
        Ok(saved)
    }

    /// All rolls matching `filter`, in store order. An empty result is not an error.
    pub async fn list(&self, filter: &RangeFilter) -> Result<Vec<Roll>, CatalogError> {
        let rolls = self.store.find_all().await?;
        Ok(self.filters.apply(rolls, filter)?)
    }

    /// Statistics for the inclusive window `[start, end]`.
    pub async fn stats(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodStatistics, CatalogError> {
        Ok(self
            .statistics
            .compute(self.store.as_ref(), start, end)
            .await?)
    }
}
