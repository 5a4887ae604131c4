//! Error handling utilities for repositories

use cms_core::error::DomainError;
use cms_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback.
///
/// `on_unique` receives the violated constraint name so callers can tell
/// a duplicate email from a duplicate phone.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(&str) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint().unwrap_or_default());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "content not found" error
pub fn content_not_found(id: Snowflake) -> DomainError {
    DomainError::ContentNotFound(id)
}
