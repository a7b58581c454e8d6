//! Functional tests for the HTTP handlers.
//!
//! These tests exercise the full call stack from handler through engine,
//! validating request defaulting, top-level checks and the error envelope
//! mapping end-to-end.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use planner_rust::http::dto::{AgendaRequest, DeadlineScanRequest, WeeklySummaryRequest};
use planner_rust::http::error::AppError;
use planner_rust::http::handlers;
use serde_json::json;

fn agenda_request(body: serde_json::Value) -> AgendaRequest {
    serde_json::from_value(body).unwrap()
}

fn deadline_request(body: serde_json::Value) -> DeadlineScanRequest {
    serde_json::from_value(body).unwrap()
}

fn summary_request(body: serde_json::Value) -> WeeklySummaryRequest {
    serde_json::from_value(body).unwrap()
}

// =========================================================
// Health Check
// =========================================================

#[tokio::test]
async fn test_health_check() {
    let Json(health) = handlers::health_check().await;

    assert_eq!(health.status, "ok");
    assert_eq!(health.version, "v1");
}

// =========================================================
// Agenda Endpoint
// =========================================================

#[tokio::test]
async fn test_agenda_full_flow() {
    let request = agenda_request(json!({
        "date": "2025-01-06",
        "workdayStart": "09:00",
        "workdayEnd": "17:00",
        "tasks": [
            {"id": 1, "title": "Run", "durationMinutes": 60},
            {"id": 2, "title": "Marathon", "durationMinutes": 600},
            {"id": 3, "title": "Stretch", "durationMinutes": 30}
        ]
    }));
    let Json(response) = handlers::generate_agenda(Json(request)).await.unwrap();

    assert_eq!(response.date, "2025-01-06");
    assert_eq!(response.blocks.len(), 2);
    assert_eq!(response.blocks[0].task_id, "1");
    assert_eq!(response.blocks[0].start.to_string(), "09:00");
    assert_eq!(response.blocks[0].end.to_string(), "10:00");
    // The marathon does not fit and the cursor stays put for the stretch.
    assert_eq!(response.blocks[1].task_id, "3");
    assert_eq!(response.blocks[1].start.to_string(), "10:00");
    assert_eq!(response.unscheduled.len(), 1);
    assert_eq!(response.unscheduled[0].task_id, "2");
}

#[tokio::test]
async fn test_agenda_tasks_default_to_empty() {
    let request = agenda_request(json!({
        "date": "2025-01-06",
        "workdayStart": "09:00",
        "workdayEnd": "17:00"
    }));
    let Json(response) = handlers::generate_agenda(Json(request)).await.unwrap();

    assert!(response.blocks.is_empty());
    assert!(response.unscheduled.is_empty());
}

#[tokio::test]
async fn test_agenda_missing_window_is_rejected() {
    let request = agenda_request(json!({"date": "2025-01-06"}));
    let err = handlers::generate_agenda(Json(request)).await.unwrap_err();

    match &err {
        AppError::BadRequest(msg) => {
            assert_eq!(msg, "date, workdayStart, and workdayEnd are required")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_agenda_empty_fields_are_rejected() {
    // Present-but-empty fields count as missing, not as values to echo.
    let request = agenda_request(json!({
        "date": "",
        "workdayStart": "09:00",
        "workdayEnd": "17:00"
    }));
    let err = handlers::generate_agenda(Json(request)).await.unwrap_err();

    match err {
        AppError::BadRequest(msg) => {
            assert_eq!(msg, "date, workdayStart, and workdayEnd are required")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_agenda_unparsable_times_are_rejected() {
    let request = agenda_request(json!({
        "date": "2025-01-06",
        "workdayStart": "nine",
        "workdayEnd": "17:00"
    }));
    let err = handlers::generate_agenda(Json(request)).await.unwrap_err();

    match err {
        AppError::BadRequest(msg) => {
            assert_eq!(msg, "workdayStart and workdayEnd must be HH:MM")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_agenda_malformed_task_entry_is_rejected() {
    let request = agenda_request(json!({
        "date": "2025-01-06",
        "workdayStart": "09:00",
        "workdayEnd": "17:00",
        "tasks": ["not an object"]
    }));
    let err = handlers::generate_agenda(Json(request)).await.unwrap_err();

    match &err {
        AppError::InvalidItems(e) => {
            assert_eq!(e.to_string(), "Item at index 0 must be an object.")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

// =========================================================
// Overdue Endpoint
// =========================================================

#[tokio::test]
async fn test_overdue_full_flow() {
    let request = deadline_request(json!({
        "items": [
            {"id": 1, "title": "X", "dueDate": "2025-01-01", "completed": false},
            {"id": 2, "title": "Y", "dueDate": "2025-01-09", "completed": false}
        ],
        "today": "2025-01-05"
    }));
    let Json(response) = handlers::find_overdue(Json(request)).await.unwrap();

    assert_eq!(response.today.to_string(), "2025-01-05");
    assert_eq!(response.overdue.len(), 1);
    assert_eq!(response.overdue[0].id, "1");
    assert_eq!(response.overdue[0].days_overdue, 4);
    assert_eq!(response.overdue[0].status, "overdue");
}

#[tokio::test]
async fn test_overdue_missing_items_is_rejected() {
    let request = deadline_request(json!({"today": "2025-01-05"}));
    let err = handlers::find_overdue(Json(request)).await.unwrap_err();

    match &err {
        AppError::InvalidItems(e) => {
            assert_eq!(e.to_string(), "Field 'items' must be a list.")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_overdue_bad_today_falls_back_silently() {
    let request = deadline_request(json!({
        "items": [],
        "today": "the fifth"
    }));
    let Json(response) = handlers::find_overdue(Json(request)).await.unwrap();

    // DefaultingFallback, never an error: the reference date becomes the
    // actual current date and the scan still succeeds.
    assert_eq!(response.today, chrono::Local::now().date_naive());
    assert!(response.overdue.is_empty());
}

// =========================================================
// At-Risk Endpoint
// =========================================================

#[tokio::test]
async fn test_at_risk_default_window_and_tiers() {
    let request = deadline_request(json!({
        "items": [
            {"id": "today", "title": "a", "dueDate": "2025-01-05", "completed": false},
            {"id": "in-two", "title": "b", "dueDate": "2025-01-07", "completed": false},
            {"id": "in-five", "title": "c", "dueDate": "2025-01-10", "completed": false},
            {"id": "in-six", "title": "d", "dueDate": "2025-01-11", "completed": false}
        ],
        "today": "2025-01-05"
    }));
    let Json(response) = handlers::find_at_risk(Json(request)).await.unwrap();

    let risks: Vec<(&str, String)> = response
        .at_risk
        .iter()
        .map(|r| (r.id.as_str(), serde_json::to_string(&r.risk).unwrap()))
        .collect();
    assert_eq!(
        risks,
        vec![
            ("today", "\"high\"".to_string()),
            ("in-two", "\"medium\"".to_string()),
            ("in-five", "\"low\"".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_at_risk_window_accepts_numeric_string() {
    let request = deadline_request(json!({
        "items": [
            {"id": "in-three", "title": "a", "dueDate": "2025-01-08", "completed": false},
            {"id": "in-four", "title": "b", "dueDate": "2025-01-09", "completed": false}
        ],
        "today": "2025-01-05",
        "riskWindowDays": "3"
    }));
    let Json(response) = handlers::find_at_risk(Json(request)).await.unwrap();

    assert_eq!(response.at_risk.len(), 1);
    assert_eq!(response.at_risk[0].id, "in-three");
}

#[tokio::test]
async fn test_at_risk_non_integer_window_is_rejected() {
    let request = deadline_request(json!({
        "items": [],
        "riskWindowDays": "a while"
    }));
    let err = handlers::find_at_risk(Json(request)).await.unwrap_err();

    match err {
        AppError::BadRequest(msg) => assert_eq!(msg, "riskWindowDays must be an integer"),
        other => panic!("unexpected error: {:?}", other),
    }
}

// =========================================================
// Weekly Summary Endpoint
// =========================================================

#[tokio::test]
async fn test_weekly_summary_full_flow() {
    let request = summary_request(json!({
        "items": [
            {"id": 1, "completedAt": "2025-01-06T10:00:00Z", "durationMin": 30, "category": "Running"}
        ],
        "weekStart": "2025-01-06",
        "weekEnd": "2025-01-12"
    }));
    let Json(summary) = handlers::weekly_summary(Json(request)).await.unwrap();

    assert_eq!(summary.week_start.to_string(), "2025-01-06");
    assert_eq!(summary.week_end.to_string(), "2025-01-12");
    assert_eq!(summary.total_completed, 1);
    assert_eq!(summary.total_duration_min, 30);
    assert_eq!(summary.by_category["Running"].count, 1);
    assert_eq!(summary.by_category["Running"].duration_min, 30);
}

#[tokio::test]
async fn test_weekly_summary_end_defaults_from_start() {
    let request = summary_request(json!({
        "items": [
            {"id": "in", "completedAt": "2025-01-12T08:00:00", "durationMin": 10},
            {"id": "out", "completedAt": "2025-01-13T08:00:00", "durationMin": 10}
        ],
        "weekStart": "2025-01-06"
    }));
    let Json(summary) = handlers::weekly_summary(Json(request)).await.unwrap();

    assert_eq!(summary.week_end.to_string(), "2025-01-12");
    assert_eq!(summary.total_completed, 1);
}

#[tokio::test]
async fn test_weekly_summary_invalid_item_is_rejected() {
    let request = summary_request(json!({
        "items": [
            {"id": "w9", "completedAt": "2025-01-06T08:00:00", "durationMin": "a lot"}
        ],
        "weekStart": "2025-01-06"
    }));
    let err = handlers::weekly_summary(Json(request)).await.unwrap_err();

    match &err {
        AppError::InvalidItems(e) => {
            assert_eq!(e.to_string(), "Item w9 has invalid durationMin.")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}
