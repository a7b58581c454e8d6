//! Public API surface for the planner backend.
//!
//! This file consolidates the DTO types produced and consumed by the
//! engines. All types derive Serialize/Deserialize for JSON serialization
//! and use camelCase field names on the wire.

pub use crate::services::agenda::ScheduledBlock;
pub use crate::services::agenda::TaskInput;
pub use crate::services::agenda::UnscheduledTask;
pub use crate::services::deadlines::AtRiskItem;
pub use crate::services::deadlines::DeadlineItem;
pub use crate::services::deadlines::OverdueItem;
pub use crate::services::deadlines::RiskLevel;
pub use crate::services::deadlines::DEFAULT_RISK_WINDOW_DAYS;
pub use crate::services::error::ValidationError;
pub use crate::services::summary::CategoryTotals;
pub use crate::services::summary::SummaryItem;
pub use crate::services::summary::WeeklySummary;
pub use crate::services::summary::UNCATEGORIZED;

pub use crate::models::ClockTime;
