//! Deadline classifier: overdue and at-risk partitioning of task items.
//!
//! Both operations share one validation pass. An item is overdue when it is
//! incomplete and due strictly before the reference date; it is at risk when
//! incomplete and due within the risk window (today included). Completed
//! items and items outside the window are excluded entirely, so the two
//! result sets are disjoint by construction.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ValidationError, ValidationResult};
use super::validate::{missing_keys, scalar_to_string, truthy};
use crate::models::parse_calendar_date;

/// Default at-risk window, in days ahead of the reference date.
pub const DEFAULT_RISK_WINDOW_DAYS: i64 = 5;

/// A task item with a due date, after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineItem {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

/// An incomplete item whose due date has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueItem {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_overdue: i64,
    pub status: String,
}

/// Severity tier derived from days remaining until the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// An incomplete item due within the risk window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskItem {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
    pub risk: RiskLevel,
}

/// Validate a raw `items` payload into typed records.
///
/// The payload must be a list of objects each carrying `id`, `title`,
/// `dueDate` (YYYY-MM-DD) and `completed` (coerced by JSON truthiness).
/// The first violation fails the whole batch.
pub fn validate_items(raw: Option<&Value>) -> ValidationResult<Vec<DeadlineItem>> {
    let list = raw
        .and_then(Value::as_array)
        .ok_or(ValidationError::ExpectedList("items"))?;

    let mut items = Vec::with_capacity(list.len());

    for (index, entry) in list.iter().enumerate() {
        let entry = entry
            .as_object()
            .ok_or(ValidationError::ExpectedObject(index))?;

        let missing = missing_keys(entry, &["id", "title", "dueDate", "completed"]);
        if !missing.is_empty() {
            return Err(ValidationError::missing_fields(index, &missing));
        }

        let id = scalar_to_string(&entry["id"])
            .ok_or_else(|| ValidationError::invalid_at_index(index, "id"))?;
        let title = scalar_to_string(&entry["title"])
            .ok_or_else(|| ValidationError::invalid_field(&id, "title"))?;

        let due_raw = scalar_to_string(&entry["dueDate"]).unwrap_or_default();
        let due_date = parse_calendar_date(&due_raw).ok_or_else(|| {
            ValidationError::invalid_field(&id, "dueDate (expected YYYY-MM-DD)")
        })?;

        items.push(DeadlineItem {
            id,
            title,
            due_date,
            completed: truthy(&entry["completed"]),
        });
    }

    Ok(items)
}

/// The reference date: the supplied `today` when parseable, otherwise the
/// actual current local date. Never an error.
pub fn resolve_today(supplied: Option<&str>) -> NaiveDate {
    supplied
        .and_then(parse_calendar_date)
        .unwrap_or_else(|| Local::now().date_naive())
}

/// Incomplete items due strictly before `today`, in input order.
pub fn find_overdue(today: NaiveDate, items: &[DeadlineItem]) -> Vec<OverdueItem> {
    items
        .iter()
        .filter(|it| !it.completed && it.due_date < today)
        .map(|it| OverdueItem {
            id: it.id.clone(),
            title: it.title.clone(),
            due_date: it.due_date,
            days_overdue: (today - it.due_date).num_days(),
            status: "overdue".to_string(),
        })
        .collect()
}

/// Incomplete items due within `[today, today + window_days]`, in input
/// order. A negative window selects nothing.
pub fn find_at_risk(
    today: NaiveDate,
    window_days: i64,
    items: &[DeadlineItem],
) -> Vec<AtRiskItem> {
    items
        .iter()
        .filter(|it| !it.completed)
        .filter_map(|it| {
            let days_remaining = (it.due_date - today).num_days();
            if (0..=window_days).contains(&days_remaining) {
                Some(AtRiskItem {
                    id: it.id.clone(),
                    title: it.title.clone(),
                    due_date: it.due_date,
                    days_remaining,
                    risk: risk_level(days_remaining),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Fixed tier boundary: due today is high, within two days medium,
/// anything further low.
pub fn risk_level(days_remaining: i64) -> RiskLevel {
    if days_remaining == 0 {
        RiskLevel::High
    } else if days_remaining <= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
