//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! Schedule transitions never fail; these errors cover the recoverable edges
//! around them (decoding a week, the validation pass, submission).
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Schedule errors
//! - 2xxx: Submission errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use bakup_shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::IntervalInverted);
//! assert_eq!(err.code.code(), 1004);
//!
//! let err = AppError::validation("Opening hours are incomplete")
//!     .with_detail("day", "Mardi");
//! assert!(err.details.is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
