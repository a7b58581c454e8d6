//! Weekly aggregator: per-category totals over an inclusive date window.
//!
//! Unlike the deadline classifier, eligibility here needs no completion
//! flag: presence in the input list with a parseable `completedAt`
//! timestamp is sufficient. The two semantics come from different source
//! record kinds (task-list items vs. completion-log items) and are kept
//! deliberately distinct.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ValidationError, ValidationResult};
use super::validate::{coerce_int, missing_keys, scalar_to_string};
use crate::models::{monday_of, parse_calendar_date, parse_iso_timestamp};

/// Category assigned to items that carry none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A completion-log item, after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItem {
    pub id: String,
    pub completed_at: NaiveDateTime,
    pub duration_min: i64,
    pub category: String,
}

/// Per-category accumulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub count: usize,
    pub duration_min: i64,
}

/// Aggregated weekly summary over `[week_start, week_end]` inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_completed: usize,
    pub total_duration_min: i64,
    pub by_category: BTreeMap<String, CategoryTotals>,
}

/// Validate a raw `items` payload into typed records.
///
/// Each entry must carry `id`, a parseable `completedAt` and an
/// integer-coercible `durationMin`. A malformed or absent `category` is
/// never an error; it falls back to the [`UNCATEGORIZED`] sentinel.
pub fn validate_items(raw: Option<&Value>) -> ValidationResult<Vec<SummaryItem>> {
    let list = raw
        .and_then(Value::as_array)
        .ok_or(ValidationError::ExpectedList("items"))?;

    let mut items = Vec::with_capacity(list.len());

    for (index, entry) in list.iter().enumerate() {
        let entry = entry
            .as_object()
            .ok_or(ValidationError::ExpectedObject(index))?;

        let missing = missing_keys(entry, &["id", "completedAt", "durationMin"]);
        if !missing.is_empty() {
            return Err(ValidationError::missing_fields(index, &missing));
        }

        let id = scalar_to_string(&entry["id"])
            .ok_or_else(|| ValidationError::invalid_at_index(index, "id"))?;

        let ts_raw = scalar_to_string(&entry["completedAt"]).unwrap_or_default();
        let completed_at = parse_iso_timestamp(&ts_raw)
            .ok_or_else(|| ValidationError::invalid_field(&id, "completedAt timestamp"))?;

        let duration_min = coerce_int(&entry["durationMin"])
            .ok_or_else(|| ValidationError::invalid_field(&id, "durationMin"))?;

        let category = entry
            .get("category")
            .and_then(scalar_to_string)
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        items.push(SummaryItem {
            id,
            completed_at,
            duration_min,
            category,
        });
    }

    Ok(items)
}

/// Resolve the aggregation window.
///
/// A missing `week_start` defaults to the Monday of the week containing
/// `today`; a supplied but unparsable one falls back to `today` itself. The
/// end defaults to `week_start + 6 days` whenever absent or unparsable,
/// giving an inclusive 7-day window.
pub fn week_bounds(
    today: NaiveDate,
    week_start: Option<&str>,
    week_end: Option<&str>,
) -> (NaiveDate, NaiveDate) {
    let start = match week_start {
        Some(s) => parse_calendar_date(s).unwrap_or(today),
        None => monday_of(today),
    };
    let end = week_end
        .and_then(parse_calendar_date)
        .unwrap_or_else(|| start + chrono::Duration::days(6));

    (start, end)
}

/// Aggregate items whose completion date falls inside the inclusive window.
pub fn summarize(items: &[SummaryItem], week_start: NaiveDate, week_end: NaiveDate) -> WeeklySummary {
    let mut total_completed = 0;
    let mut total_duration_min = 0;
    let mut by_category: BTreeMap<String, CategoryTotals> = BTreeMap::new();

    for item in items {
        let completed_on = item.completed_at.date();
        if completed_on < week_start || completed_on > week_end {
            continue;
        }

        total_completed += 1;
        total_duration_min += item.duration_min;

        let totals = by_category.entry(item.category.clone()).or_default();
        totals.count += 1;
        totals.duration_min += item.duration_min;
    }

    WeeklySummary {
        week_start,
        week_end,
        total_completed,
        total_duration_min,
        by_category,
    }
}

/// Current local date, the reference for window defaulting.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}
