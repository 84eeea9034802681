use crate::{error::AppError, AppState};
use analytics::PeriodStatistics;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use core_types::{Range, RangeFilter, Roll, RollId};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateRollRequest {
    pub length: f64,
    pub weight: f64,
}

/// Query parameters of `GET /rolls`. Each pair only filters when both ends are given.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollFilterQuery {
    pub id_from: Option<RollId>,
    pub id_to: Option<RollId>,
    pub length_from: Option<f64>,
    pub length_to: Option<f64>,
    pub weight_from: Option<f64>,
    pub weight_to: Option<f64>,
    pub added_from: Option<NaiveDate>,
    pub added_to: Option<NaiveDate>,
    pub removed_from: Option<NaiveDate>,
    pub removed_to: Option<NaiveDate>,
}

impl From<RollFilterQuery> for RangeFilter {
    fn from(q: RollFilterQuery) -> Self {
        RangeFilter {
            id: Range::new(q.id_from, q.id_to),
            length: Range::new(q.length_from, q.length_to),
            weight: Range::new(q.weight_from, q.weight_to),
            date_added: Range::new(q.added_from, q.added_to),
            date_removed: Range::new(q.removed_from, q.removed_to),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// # POST /rolls
pub async fn add_roll(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(request), _): WithRejection<Json<CreateRollRequest>, AppError>,
) -> Result<(StatusCode, Json<Roll>), AppError> {
    let roll = state.catalog.add(request.length, request.weight).await?;
    tracing::info!(id = roll.id, "Roll added.");
    Ok((StatusCode::CREATED, Json(roll)))
}

/// # DELETE /rolls/:id
/// Soft-removes a roll; the record stays listed with its removal date.
pub async fn remove_roll(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<RollId>, AppError>,
) -> Result<Json<Roll>, AppError> {
    let roll = state.catalog.remove(id).await?;
    tracing::info!(id = roll.id, "Roll removed.");
    Ok(Json(roll))
}

/// # GET /rolls
pub async fn list_rolls(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(query), _): WithRejection<Query<RollFilterQuery>, AppError>,
) -> Result<Json<Vec<Roll>>, AppError> {
    let rolls = state.catalog.list(&query.into()).await?;
    Ok(Json(rolls))
}

/// # GET /rolls/stats?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(query), _): WithRejection<Query<StatsQuery>, AppError>,
) -> Result<Json<PeriodStatistics>, AppError> {
    if query.start > query.end {
        return Err(AppError::BadRequest(
            "The start date of the period cannot be later than the end date".to_string(),
        ));
    }
    let stats = state.catalog.stats(query.start, query.end).await?;
    Ok(Json(stats))
}
