use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Menu store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Input rejected before any mutation; carries the offending field
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("Menu item id already exists: {0}")]
    DuplicateId(String),
}

impl MenuError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Field that failed validation, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::DuplicateId(_) => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { field: "price", .. } => ErrorCode::MenuItemInvalidPrice,
            Self::Validation { field: "course", .. } => ErrorCode::MenuItemInvalidCourse,
            Self::Validation { .. } => ErrorCode::ValidationFailed,
            Self::DuplicateId(_) => ErrorCode::MenuItemDuplicateId,
        }
    }
}

impl From<MenuError> for AppError {
    fn from(err: MenuError) -> Self {
        let code = err.code();
        match err {
            MenuError::Validation { field, message } => {
                AppError::with_message(code, message).with_detail("field", field)
            }
            MenuError::DuplicateId(id) => AppError::new(code).with_detail("resource", id),
        }
    }
}

pub type MenuResult<T> = Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_by_field() {
        assert_eq!(
            MenuError::validation("price", "bad").code(),
            ErrorCode::MenuItemInvalidPrice
        );
        assert_eq!(
            MenuError::validation("course", "bad").code(),
            ErrorCode::MenuItemInvalidCourse
        );
        assert_eq!(
            MenuError::validation("name", "bad").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            MenuError::DuplicateId("1".into()).code(),
            ErrorCode::MenuItemDuplicateId
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = MenuError::validation("name", "Please fill in all fields.").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Please fill in all fields.");
        assert_eq!(err.detail("field").unwrap(), "name");

        let err: AppError = MenuError::DuplicateId("item-2-5".into()).into();
        assert_eq!(err.code, ErrorCode::MenuItemDuplicateId);
        assert_eq!(err.message, "Menu item id already exists");
        assert_eq!(err.detail("resource").unwrap(), "item-2-5");
    }

    #[test]
    fn test_field_accessor() {
        let err = MenuError::validation("description", "missing");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("description"));
        assert_eq!(err.to_string(), "missing");

        let err = MenuError::DuplicateId("1".into());
        assert!(!err.is_validation());
        assert_eq!(err.field(), None);
    }
}
