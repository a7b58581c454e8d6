//! Data Transfer Objects for the HTTP API.
//!
//! Requests deliberately accept optional / loosely-typed fields so that the
//! engines can produce their own field- and index-qualified validation
//! errors instead of a generic deserialization failure. Engine result DTOs
//! are re-exported from the service modules since they already derive
//! Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Re-export existing DTOs that are already serializable
pub use crate::api::{AtRiskItem, OverdueItem, ScheduledBlock, UnscheduledTask, WeeklySummary};

/// Request body for agenda generation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgendaRequest {
    /// Calendar day the agenda is for (echoed back verbatim)
    #[serde(default)]
    pub date: Option<String>,
    /// Workday start, HH:MM
    #[serde(default)]
    pub workday_start: Option<String>,
    /// Workday end, HH:MM
    #[serde(default)]
    pub workday_end: Option<String>,
    /// Raw task entries; validated by the scheduler
    #[serde(default)]
    pub tasks: Vec<Value>,
}

/// Response for agenda generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaResponse {
    pub date: String,
    pub blocks: Vec<ScheduledBlock>,
    pub unscheduled: Vec<UnscheduledTask>,
}

/// Request body shared by the overdue and at-risk operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineScanRequest {
    /// Raw item list; validated by the classifier
    #[serde(default)]
    pub items: Option<Value>,
    /// Reference date, YYYY-MM-DD; defaults to the current date
    #[serde(default)]
    pub today: Option<String>,
    /// At-risk window in days; defaults to 5 (ignored by the overdue scan)
    #[serde(default)]
    pub risk_window_days: Option<Value>,
}

/// Response for the overdue scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueResponse {
    pub today: NaiveDate,
    pub overdue: Vec<OverdueItem>,
}

/// Response for the at-risk scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskResponse {
    pub today: NaiveDate,
    pub at_risk: Vec<AtRiskItem>,
}

/// Request body for the weekly summary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummaryRequest {
    /// Raw item list; validated by the aggregator
    #[serde(default)]
    pub items: Option<Value>,
    /// Window start, YYYY-MM-DD; defaults to Monday of the current week
    #[serde(default)]
    pub week_start: Option<String>,
    /// Window end, YYYY-MM-DD; defaults to weekStart + 6 days
    #[serde(default)]
    pub week_end: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Service name
    pub service: String,
    /// Version of the API
    pub version: String,
}
