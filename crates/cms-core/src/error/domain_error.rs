//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    /// Raised both for unknown ids and for ids owned by another user;
    /// the two cases are indistinguishable to the caller.
    #[error("Content not found: {0}")]
    ContentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number: must be exactly 10 digits")]
    InvalidPhone,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("{field} too long: max {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    // =========================================================================
    // Uniqueness Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ContentNotFound(_) => "UNKNOWN_CONTENT",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPhone => "INVALID_PHONE",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::FieldTooLong { .. } => "FIELD_TOO_LONG",

            Self::EmailAlreadyExists => "EMAIL_TAKEN",
            Self::PhoneAlreadyExists => "PHONE_TAKEN",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ContentNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidPhone
                | Self::WeakPassword(_)
                | Self::FieldTooLong { .. }
        )
    }

    /// Check if this is a uniqueness violation.
    ///
    /// Uniqueness failures surface with the same 400 status as validation
    /// failures, distinguished only by error code.
    pub fn is_uniqueness(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::PhoneAlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ContentNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_CONTENT");

        let err = DomainError::EmailAlreadyExists;
        assert_eq!(err.code(), "EMAIL_TAKEN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::ContentNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidPhone.is_validation());
        assert!(DomainError::FieldTooLong { field: "title", max: 30 }.is_validation());
        assert!(!DomainError::EmailAlreadyExists.is_validation());
    }

    #[test]
    fn test_is_uniqueness() {
        assert!(DomainError::EmailAlreadyExists.is_uniqueness());
        assert!(DomainError::PhoneAlreadyExists.is_uniqueness());
        assert!(!DomainError::InvalidEmail.is_uniqueness());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ContentNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Content not found: 123");

        let err = DomainError::FieldTooLong { field: "title", max: 30 };
        assert_eq!(err.to_string(), "title too long: max 30 characters");
    }
}
