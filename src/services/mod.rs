//! Service layer: the three stateless computation engines.
//!
//! Each engine is a pure function over its validated request payload. No
//! engine depends on another, and nothing is shared between invocations;
//! concurrent requests may run fully in parallel.

pub mod agenda;

pub mod deadlines;

pub mod error;

pub mod summary;

pub(crate) mod validate;

pub use agenda::{schedule_tasks, validate_tasks};
pub use deadlines::{find_at_risk, find_overdue, resolve_today, risk_level};
pub use error::{ValidationError, ValidationResult};
pub use summary::{summarize, week_bounds};
