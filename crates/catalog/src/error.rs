use analytics::AnalyticsError;
use core_types::{CoreError, RollId};
use thiserror::Error;

/// The caller-facing failures of the roll catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Bad creation or removal input, or bad filter bounds.
    #[error("{0}")]
    InvalidRollData(String),

    #[error("MetalRoll with id {0} not found")]
    RollNotFound(RollId),

    #[error("{0}")]
    InvalidRange(String),

    #[error("Database error: {0}")]
    Store(#[from] database::DbError),

    #[error("Statistics could not be computed: {0}")]
    Statistics(String),
}

impl From<CoreError> for CatalogError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(_, message) => CatalogError::InvalidRollData(message),
        }
    }
}

impl From<AnalyticsError> for CatalogError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::InvalidFilter(message) => CatalogError::InvalidRollData(message),
            AnalyticsError::InvalidRange { .. } => CatalogError::InvalidRange(
                "The start date of the period cannot be later than the end date".to_string(),
            ),
            AnalyticsError::Database(db_err) => CatalogError::Store(db_err),
            AnalyticsError::Task(join_err) => CatalogError::Statistics(join_err.to_string()),
        }
    }
}
