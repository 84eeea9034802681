use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{NewRoll, Roll, RollId};

use crate::error::DbError;

/// The abstract persistence interface for rolls.
///
/// Every method is a single, independently consistent operation. Sequences
/// are returned in store-native order (ascending id).
#[async_trait]
pub trait RollStore: Send + Sync {
    /// Persists a new roll and returns it with its assigned id.
    async fn insert(&self, roll: NewRoll) -> Result<Roll, DbError>;

    async fn find_by_id(&self, id: RollId) -> Result<Option<Roll>, DbError>;

    /// Overwrites the stored roll with the same id.
    ///
    /// Fails with `DbError::NotFound` if no such roll exists.
    async fn update(&self, roll: &Roll) -> Result<Roll, DbError>;

    async fn find_all(&self) -> Result<Vec<Roll>, DbError>;

    /// Rolls whose add date lies in `[from, to]`.
    async fn find_added_between(&self, from: NaiveDate, to: NaiveDate)
    -> Result<Vec<Roll>, DbError>;

    /// Rolls whose removal date lies in `[from, to]`.
    async fn find_removed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError>;

    /// Rolls whose lifespan overlaps `[from, to]`: added on or before `to`
    /// and either still in stock or removed on or after `from`.
    async fn find_active_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError>;
}
