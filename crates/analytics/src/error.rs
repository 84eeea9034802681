use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("{0}")]
    InvalidFilter(String),

    #[error("The start date of the period cannot be later than the end date ({start} > {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Database error: {0}")]
    Database(#[from] database::DbError),

    #[error("Statistics task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
