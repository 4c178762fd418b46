//! Error types

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error a presentation layer receives: a stable
/// [`ErrorCode`], a human-readable message it can show as-is, and optional
/// structured details (the offending field, the unknown resource, ...).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry by key
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::MenuItemDuplicateId);
        assert_eq!(err.code, ErrorCode::MenuItemDuplicateId);
        assert_eq!(err.message, "Menu item id already exists");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::with_message(ErrorCode::MenuItemInvalidPrice, "price must be positive");
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
        assert_eq!(err.message, "price must be positive");
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "Please fill in all fields.")
            .with_detail("field", "name")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field").unwrap(), "name");
        assert_eq!(err.detail("reason").unwrap(), "required");
        assert!(err.detail("missing").is_none());
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::MenuItemInvalidCourse, "Please choose a course");
        assert_eq!(format!("{}", err), "Please choose a course");
    }

    #[test]
    fn test_app_error_serialize() {
        let err = AppError::with_message(ErrorCode::MenuItemInvalidPrice, "bad")
            .with_detail("field", "price");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 6002);
        assert_eq!(json["message"], "bad");
        assert_eq!(json["details"]["field"], "price");

        let json = serde_json::to_value(AppError::new(ErrorCode::ValidationFailed)).unwrap();
        assert!(json.get("details").is_none());

        let back: AppError = serde_json::from_value(json).unwrap();
        assert_eq!(back.code, ErrorCode::ValidationFailed);
    }
}
