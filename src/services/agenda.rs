//! Agenda scheduler: packs task durations into a fixed workday window.
//!
//! Placement is first-fit-in-order: tasks are tried in the exact order
//! supplied, with no sorting by duration, priority or due date. A task that
//! does not fit is reported unscheduled and the cursor stays put, so a
//! later, shorter task may still use the remaining gap.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ValidationError, ValidationResult};
use super::validate::{coerce_int, missing_keys, scalar_to_string};
use crate::models::ClockTime;

/// A task submitted for scheduling, after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub id: String,
    pub title: String,
    pub duration_minutes: i64,
}

/// A placed time block within the workday.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledBlock {
    pub task_id: String,
    pub title: String,
    pub start: ClockTime,
    pub end: ClockTime,
    pub scheduled: bool,
}

/// A task whose placement would overrun the workday end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnscheduledTask {
    pub task_id: String,
    pub title: String,
    pub scheduled: bool,
}

/// Validate raw task entries into typed records.
///
/// Each entry must be an object with scalar `id` and `title`;
/// `durationMinutes` defaults to 0 (and is then dropped by the scheduler)
/// but must be integer-coercible when present.
pub fn validate_tasks(raw: &[Value]) -> ValidationResult<Vec<TaskInput>> {
    let mut tasks = Vec::with_capacity(raw.len());

    for (index, entry) in raw.iter().enumerate() {
        let entry = entry
            .as_object()
            .ok_or(ValidationError::ExpectedObject(index))?;

        let missing = missing_keys(entry, &["id", "title"]);
        if !missing.is_empty() {
            return Err(ValidationError::missing_fields(index, &missing));
        }

        let id = scalar_to_string(&entry["id"])
            .ok_or_else(|| ValidationError::invalid_at_index(index, "id"))?;
        let title = scalar_to_string(&entry["title"])
            .ok_or_else(|| ValidationError::invalid_field(&id, "title"))?;

        let duration_minutes = match entry.get("durationMinutes") {
            None => 0,
            Some(v) => coerce_int(v)
                .ok_or_else(|| ValidationError::invalid_field(&id, "durationMinutes"))?,
        };

        tasks.push(TaskInput {
            id,
            title,
            duration_minutes,
        });
    }

    Ok(tasks)
}

/// Pack `tasks` into the `[start, end)` workday window.
///
/// Maintains a single cursor starting at `start`. A task fits when
/// `cursor + duration <= end`; a non-fitting task does not advance the
/// cursor. Tasks with duration <= 0 are skipped entirely, reported neither
/// as blocks nor as unscheduled. If `end` is at or before `start` the window
/// has no capacity and every positive-duration task comes back unscheduled.
pub fn schedule_tasks(
    start: ClockTime,
    end: ClockTime,
    tasks: &[TaskInput],
) -> (Vec<ScheduledBlock>, Vec<UnscheduledTask>) {
    let mut cursor = start;
    let mut blocks = Vec::new();
    let mut unscheduled = Vec::new();

    for task in tasks {
        if task.duration_minutes <= 0 {
            continue;
        }

        let candidate_end = cursor.plus_minutes(task.duration_minutes);
        if candidate_end <= end {
            blocks.push(ScheduledBlock {
                task_id: task.id.clone(),
                title: task.title.clone(),
                start: cursor,
                end: candidate_end,
                scheduled: true,
            });
            cursor = candidate_end;
        } else {
            unscheduled.push(UnscheduledTask {
                task_id: task.id.clone(),
                title: task.title.clone(),
                scheduled: false,
            });
        }
    }

    (blocks, unscheduled)
}
