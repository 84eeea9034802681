use crate::DbError;
use crate::store::RollStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{NewRoll, Roll, RollId};
use sqlx::postgres::PgPool;

const ROLL_COLUMNS: &str = "id, length, weight, date_added, date_removed";

/// The `DbRepository` is the PostgreSQL adapter for `RollStore`.
/// It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs a date-bounded select shared by the range queries.
    async fn fetch_between(
        &self,
        condition: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError> {
        let sql = format!("SELECT {ROLL_COLUMNS} FROM rolls WHERE {condition} ORDER BY id ASC");
        let rolls = sqlx::query_as::<_, Roll>(&sql)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!(%from, %to, count = rolls.len(), "Fetched rolls where {}", condition);
        Ok(rolls)
    }
}

#[async_trait]
impl RollStore for DbRepository {
    async fn insert(&self, roll: NewRoll) -> Result<Roll, DbError> {
        let sql = format!(
            "INSERT INTO rolls (length, weight, date_added) VALUES ($1, $2, $3) RETURNING {ROLL_COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Roll>(&sql)
            .bind(roll.length)
            .bind(roll.weight)
            .bind(roll.date_added)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(id = saved.id, "Inserted roll");
        Ok(saved)
    }

    async fn find_by_id(&self, id: RollId) -> Result<Option<Roll>, DbError> {
        let sql = format!("SELECT {ROLL_COLUMNS} FROM rolls WHERE id = $1");
        let roll = sqlx::query_as::<_, Roll>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(roll)
    }

    async fn update(&self, roll: &Roll) -> Result<Roll, DbError> {
        let sql = format!(
            r#"
            UPDATE rolls
            SET length = $2, weight = $3, date_added = $4, date_removed = $5
            WHERE id = $1
            RETURNING {ROLL_COLUMNS}
            "#
        );
        let updated = sqlx::query_as::<_, Roll>(&sql)
            .bind(roll.id)
            .bind(roll.length)
            .bind(roll.weight)
            .bind(roll.date_added)
            .bind(roll.date_removed)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound(roll.id))?;
        tracing::debug!(id = updated.id, "Updated roll");
        Ok(updated)
    }

    async fn find_all(&self) -> Result<Vec<Roll>, DbError> {
        let sql = format!("SELECT {ROLL_COLUMNS} FROM rolls ORDER BY id ASC");
        let rolls = sqlx::query_as::<_, Roll>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rolls)
    }

    async fn find_added_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError> {
        self.fetch_between("date_added BETWEEN $1 AND $2", from, to)
            .await
    }

    async fn find_removed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError> {
        self.fetch_between("date_removed BETWEEN $1 AND $2", from, to)
            .await
    }

    async fn find_active_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Roll>, DbError> {
        self.fetch_between(
            "date_added <= $2 AND (date_removed IS NULL OR date_removed >= $1)",
            from,
            to,
        )
        .await
    }
}
