use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog::CatalogError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The request was malformed and never reached the catalog.
    #[error("{0}")]
    BadRequest(String),
}

/// The JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

pub const ROLL_NOT_FOUND: &str = "ROLL_NOT_FOUND";
pub const INVALID_DATA: &str = "INVALID_DATA";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Maps a catalog failure to its HTTP status and error code.
fn status_for(err: &CatalogError) -> (StatusCode, &'static str) {
    match err {
        CatalogError::RollNotFound(_) => (StatusCode::NOT_FOUND, ROLL_NOT_FOUND),
        CatalogError::InvalidRollData(_) | CatalogError::InvalidRange(_) => {
            (StatusCode::BAD_REQUEST, INVALID_DATA)
        }
        CatalogError::Store(_) | CatalogError::Statistics(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Catalog(err) => {
                let (status, code) = status_for(&err);
                if status.is_server_error() {
                    tracing::error!(error = ?err, "Catalog error.");
                    (status, code, "An internal error has occurred".to_string())
                } else {
                    (status, code, err.to_string())
                }
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, INVALID_DATA, message),
        };

        let body = Json(ErrorResponse {
            code: code.to_string(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
