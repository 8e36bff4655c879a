//! Shared types for the practitioner onboarding pages
//!
//! Weekly opening hours model and its transitions, schedule actions, the
//! practitioner profile payload, and the error types used across crates.

pub mod error;
pub mod intent;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use intent::ScheduleAction;
pub use models::{
    Bound, DaySchedule, Period, PractitionerProfile, TimeInterval, WeekSchedule, Weekday,
};
