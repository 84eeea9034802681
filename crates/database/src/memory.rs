use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{NewRoll, Roll, RollId};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::RollStore;

#[derive(Debug, Default)]
struct Inner {
    rolls: Vec<Roll>,
    last_id: RollId,
}

/// An in-process `RollStore` holding rolls in insertion (= id) order.
#[derive(Debug, Default)]
pub struct MemoryRollStore {
    inner: RwLock<Inner>,
}

impl MemoryRollStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing rolls, keeping their ids.
    ///
    /// New inserts continue after the highest seeded id.
    pub fn with_rolls(mut rolls: Vec<Roll>) -> Self {
        rolls.sort_by_key(|r| r.id);
        let last_id = rolls.last().map_or(0, |r| r.id);
        Self {
            inner: RwLock::new(Inner { rolls, last_id }),
        }
    }

    async fn select<F>(&self, predicate: F) -> Vec<Roll>
    where
        F: Fn(&Roll) -> bool,
    {
        let inner = self.inner.read().await;
        inner.rolls.iter().filter(|r| predicate(r)).cloned().collect()
    }
}

#[async_trait]
impl RollStore for MemoryRollStore {
    async fn insert(&self, roll: NewRoll) -> Result<Roll, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let saved = roll.into_roll(inner.last_id);
        inner.rolls.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: RollId) -> Result<Option<Roll>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.rolls.iter().find(|r| r.id == id).cloned())
    }

    async fn update(&self, roll: &Roll) -> Result<Roll, DbError> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .rolls
            .iter_mut()
            .find(|r| r.id == roll.id)
            .ok_or(DbError::NotFound(roll.id))?;
        *slot = roll.clone();
        Ok(roll.clone())
    }

    async fn find_all(&self) -> Result<Vec<Roll>, DbError> {
        Ok(self.inner.read().await.rolls.clone())
    }

    async fn find_added_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError> {
        Ok(self
            .select(|r| r.date_added >= from && r.date_added <= to)
            .await)
    }

    async fn find_removed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError> {
        Ok(self
            .select(|r| r.date_removed.is_some_and(|d| d >= from && d <= to))
            .await)
    }

    async fn find_active_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError> {
        Ok(self.select(|r| r.overlaps(from, to)).await)
    }
}
