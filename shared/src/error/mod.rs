//! Unified error system for the menu workspace
//!
//! This module provides:
//! - [`ErrorCode`]: Stable numeric codes for every error the menu engine reports
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::MenuItemDuplicateId);
//! assert_eq!(err.message, "Menu item id already exists");
//!
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Please fill in all fields.")
//!     .with_detail("field", "description");
//! assert_eq!(err.detail("field").unwrap(), "description");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;
