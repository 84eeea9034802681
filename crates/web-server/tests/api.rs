use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use catalog::{FixedClock, RollCatalog};
use chrono::NaiveDate;
use core_types::Roll;
use database::MemoryRollStore;
use serde_json::{json, Value};
use tower::ServiceExt;
use web_server::{router, AppState};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app_with(rolls: Vec<Roll>) -> Router {
    let store = Arc::new(MemoryRollStore::with_rolls(rolls));
    let catalog = RollCatalog::new(store, Arc::new(FixedClock(day(2026, 1, 15))));
    router(Arc::new(AppState { catalog }))
}

fn january_rolls() -> Vec<Roll> {
    vec![
        Roll {
            id: 1,
            length: 10.0,
            weight: 2.0,
            date_added: day(2026, 1, 5),
            date_removed: None,
        },
        Roll {
            id: 2,
            length: 15.0,
            weight: 3.0,
            date_added: day(2026, 1, 10),
            date_removed: Some(day(2026, 1, 20)),
        },
    ]
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_returns_201_with_the_new_roll() {
    let (status, body) = send(
        app_with(vec![]),
        post_json("/rolls", json!({ "length": 10.0, "weight": 2.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["length"], 10.0);
    assert_eq!(body["dateAdded"], "2026-01-15");
    assert!(body["dateRemoved"].is_null());
}

#[tokio::test]
async fn create_with_negative_length_is_invalid_data() {
    let (status, body) = send(
        app_with(vec![]),
        post_json("/rolls", json!({ "length": -5.0, "weight": 2.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATA");
    assert_eq!(body["message"], "Length and weight must be positive numbers.");
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_catalog() {
    let (status, body) = send(
        app_with(vec![]),
        post_json("/rolls", json!({ "length": "long" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATA");
}

#[tokio::test]
async fn delete_soft_removes_the_roll() {
    let app = app_with(january_rolls());

    let (status, body) = send(app.clone(), delete("/rolls/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["dateRemoved"], "2026-01-15");

    let (_, listed) = send(app, get("/rolls")).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_of_unknown_roll_is_404() {
    let (status, body) = send(app_with(vec![]), delete("/rolls/777")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ROLL_NOT_FOUND");
    assert_eq!(body["message"], "MetalRoll with id 777 not found");
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_400() {
    let (status, body) = send(app_with(vec![]), delete("/rolls/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATA");
}

#[tokio::test]
async fn list_applies_query_ranges() {
    let (status, body) = send(
        app_with(january_rolls()),
        get("/rolls?lengthFrom=7&lengthTo=12"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rolls = body.as_array().unwrap();
    assert_eq!(rolls.len(), 1);
    assert_eq!(rolls[0]["id"], 1);
}

#[tokio::test]
async fn list_ignores_a_lone_bound() {
    let (status, body) = send(app_with(january_rolls()), get("/rolls?idFrom=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_with_reversed_dates_is_invalid_data() {
    let (status, body) = send(
        app_with(january_rolls()),
        get("/rolls?addedFrom=2026-02-01&addedTo=2026-01-01"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The start date of adding cannot be later than the end date."
    );
}

#[tokio::test]
async fn stats_for_january() {
    let (status, body) = send(
        app_with(january_rolls()),
        get("/rolls/stats?start=2026-01-01&end=2026-01-31"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["addedCount"], 2);
    assert_eq!(body["removedCount"], 1);
    assert_eq!(body["avgLength"], 12.5);
    assert_eq!(body["maxIntervalDays"], 10);
    assert_eq!(body["dayWithMaxCount"], "2026-01-10");
}

#[tokio::test]
async fn stats_over_a_century_window() {
    let (status, body) = send(
        app_with(january_rolls()),
        get("/rolls/stats?start=2000-01-01&end=2099-12-31"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["addedCount"], 2);
    assert_eq!(body["dayWithMinCount"], "2000-01-01");
    assert_eq!(body["dayWithMaxCount"], "2026-01-10");
    assert_eq!(body["dayWithMaxWeight"], "2026-01-10");
}

#[tokio::test]
async fn stats_with_reversed_window_is_400() {
    let (status, body) = send(
        app_with(january_rolls()),
        get("/rolls/stats?start=2026-02-01&end=2026-01-01"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATA");
}

#[tokio::test]
async fn stats_without_dates_is_400() {
    let (status, _) = send(app_with(january_rolls()), get("/rolls/stats?start=2026-01-01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_check_answers_ok() {
    let response = app_with(vec![]).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
