//! Unified error codes for the menu workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Menu errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a presentation layer in
/// any language can match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Text field missing or too long
    ValidationFailed = 2,

    // ==================== 6xxx: Menu ====================
    /// Menu item price is missing, non-numeric, not positive or above the limit
    MenuItemInvalidPrice = 6002,
    /// Course is not one of the fixed menu courses
    MenuItemInvalidCourse = 6003,
    /// Menu item id already present in the collection
    MenuItemDuplicateId = 6004,
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
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::MenuItemInvalidPrice => "Please enter a valid price",
            ErrorCode::MenuItemInvalidCourse => "Course must be Starters, Mains or Desserts",
            ErrorCode::MenuItemDuplicateId => "Menu item id already exists",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            6002 => Ok(ErrorCode::MenuItemInvalidPrice),
            6003 => Ok(ErrorCode::MenuItemInvalidCourse),
            6004 => Ok(ErrorCode::MenuItemDuplicateId),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 4] = [
        ErrorCode::ValidationFailed,
        ErrorCode::MenuItemInvalidPrice,
        ErrorCode::MenuItemInvalidCourse,
        ErrorCode::MenuItemDuplicateId,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::MenuItemInvalidPrice.code(), 6002);
        assert_eq!(ErrorCode::MenuItemInvalidCourse.code(), 6003);
        assert_eq!(ErrorCode::MenuItemDuplicateId.code(), 6004);
    }

    #[test]
    fn test_try_from_every_code() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
            assert!(!code.message().is_empty());
        }
    }

    #[test]
    fn test_try_from_invalid() {
        for value in [0, 1, 3, 6001, 9001, 4242] {
            assert_eq!(ErrorCode::try_from(value), Err(InvalidErrorCode(value)));
        }
        assert_eq!(
            InvalidErrorCode(4242).to_string(),
            "Invalid error code: 4242"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::MenuItemInvalidCourse).unwrap();
        assert_eq!(json, "6003");

        let code: ErrorCode = serde_json::from_str("6002").unwrap();
        assert_eq!(code, ErrorCode::MenuItemInvalidPrice);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::MenuItemDuplicateId.to_string(), "E6004");
    }
}
