//! Data models
//!
//! Shared between the editing session and whatever renders or submits the
//! practitioner page. No I/O happens here.

pub mod practitioner;
pub mod schedule;
pub mod validation;

// Re-exports
pub use practitioner::*;
pub use schedule::*;
pub use validation::{ScheduleIssue, ensure_valid, validate_week};
