//! Unified error codes for the practitioner onboarding workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Schedule errors
//! - 2xxx: Submission errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the rendering layer can
/// match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Schedule ====================
    /// Day index outside Monday..=Sunday
    DayIndexOutOfRange = 1001,
    /// Week does not hold exactly seven days in Monday-first order
    InvalidWeekLayout = 1002,
    /// Time bound is not a `HH:MM` wall-clock time
    InvalidTimeFormat = 1003,
    /// Interval start is not before its end
    IntervalInverted = 1004,
    /// Morning interval runs into the afternoon interval
    IntervalsOverlap = 1005,
    /// Open day with an empty time bound
    MissingHours = 1006,

    // ==================== 2xxx: Submission ====================
    /// Submission could not be delivered
    SubmissionFailed = 2001,
    /// Submission payload could not be encoded
    SubmissionEncoding = 2002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// File read/write failed
    IoError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",

            // Schedule
            ErrorCode::DayIndexOutOfRange => "Day index must be between 0 and 6",
            ErrorCode::InvalidWeekLayout => "Week must list Monday to Sunday in order",
            ErrorCode::InvalidTimeFormat => "Time must use the HH:MM format",
            ErrorCode::IntervalInverted => "Interval start must be before its end",
            ErrorCode::IntervalsOverlap => "Morning hours must end before afternoon hours start",
            ErrorCode::MissingHours => "Open day is missing opening hours",

            // Submission
            ErrorCode::SubmissionFailed => "Submission failed",
            ErrorCode::SubmissionEncoding => "Submission payload could not be encoded",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::IoError => "File operation failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),

            // Schedule
            1001 => Ok(ErrorCode::DayIndexOutOfRange),
            1002 => Ok(ErrorCode::InvalidWeekLayout),
            1003 => Ok(ErrorCode::InvalidTimeFormat),
            1004 => Ok(ErrorCode::IntervalInverted),
            1005 => Ok(ErrorCode::IntervalsOverlap),
            1006 => Ok(ErrorCode::MissingHours),

            // Submission
            2001 => Ok(ErrorCode::SubmissionFailed),
            2002 => Ok(ErrorCode::SubmissionEncoding),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
