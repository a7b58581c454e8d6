//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! engines in the service layer. Handlers own the top-level request
//! checks (required fields, time formats, window coercion); item-level
//! validation lives with each engine.

use axum::Json;

use super::dto::{
    AgendaRequest, AgendaResponse, AtRiskResponse, DeadlineScanRequest, HealthResponse,
    OverdueResponse, WeeklySummaryRequest,
};
use super::error::AppError;
use crate::models::ClockTime;
use crate::services::validate::coerce_int;
use crate::services::{agenda, deadlines, summary};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "planner-backend".to_string(),
        version: "v1".to_string(),
    })
}

// =============================================================================
// Agenda Scheduler
// =============================================================================

/// POST /v1/agenda
///
/// Pack the supplied tasks into the workday window, first-fit-in-order.
pub async fn generate_agenda(
    Json(request): Json<AgendaRequest>,
) -> HandlerResult<AgendaResponse> {
    // An empty string counts as absent, same as the required-field check.
    let required = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (date, start_raw, end_raw) = match (
        required(request.date),
        required(request.workday_start),
        required(request.workday_end),
    ) {
        (Some(d), Some(s), Some(e)) => (d, s, e),
        _ => {
            return Err(AppError::BadRequest(
                "date, workdayStart, and workdayEnd are required".to_string(),
            ))
        }
    };

    let bad_time =
        |_| AppError::BadRequest("workdayStart and workdayEnd must be HH:MM".to_string());
    let start = ClockTime::parse(&start_raw).map_err(bad_time)?;
    let end = ClockTime::parse(&end_raw).map_err(bad_time)?;

    let tasks = agenda::validate_tasks(&request.tasks)?;
    let (blocks, unscheduled) = agenda::schedule_tasks(start, end, &tasks);

    Ok(Json(AgendaResponse {
        date,
        blocks,
        unscheduled,
    }))
}

// =============================================================================
// Deadline Classifier
// =============================================================================

/// POST /v1/overdue
///
/// List incomplete items due strictly before the reference date.
pub async fn find_overdue(
    Json(request): Json<DeadlineScanRequest>,
) -> HandlerResult<OverdueResponse> {
    let items = deadlines::validate_items(request.items.as_ref())?;
    let today = deadlines::resolve_today(request.today.as_deref());

    let overdue = deadlines::find_overdue(today, &items);

    Ok(Json(OverdueResponse { today, overdue }))
}

/// POST /v1/atrisk
///
/// List incomplete items due within the risk window, with severity tiers.
pub async fn find_at_risk(
    Json(request): Json<DeadlineScanRequest>,
) -> HandlerResult<AtRiskResponse> {
    let items = deadlines::validate_items(request.items.as_ref())?;
    let today = deadlines::resolve_today(request.today.as_deref());

    let window_days = match request.risk_window_days {
        None => deadlines::DEFAULT_RISK_WINDOW_DAYS,
        Some(v) => coerce_int(&v).ok_or_else(|| {
            AppError::BadRequest("riskWindowDays must be an integer".to_string())
        })?,
    };

    let at_risk = deadlines::find_at_risk(today, window_days, &items);

    Ok(Json(AtRiskResponse { today, at_risk }))
}

// =============================================================================
// Weekly Aggregator
// =============================================================================

/// POST /v1/weekly-summary
///
/// Aggregate completed items inside the inclusive week window.
pub async fn weekly_summary(
    Json(request): Json<WeeklySummaryRequest>,
) -> HandlerResult<super::dto::WeeklySummary> {
    let items = summary::validate_items(request.items.as_ref())?;
    let (week_start, week_end) = summary::week_bounds(
        summary::current_date(),
        request.week_start.as_deref(),
        request.week_end.as_deref(),
    );

    Ok(Json(summary::summarize(&items, week_start, week_end)))
}
