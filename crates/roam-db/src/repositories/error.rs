//! Error handling utilities for repositories

use roam_core::error::DomainError;
use roam_core::Id;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the users table to the colliding field
///
/// The partial unique indexes cover live rows only, so a violation here means
/// a genuine conflict with a non-deleted account.
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_email_live_idx") => DomainError::EmailAlreadyRegistered,
                Some("users_nickname_live_idx") => DomainError::NicknameAlreadyTaken,
                Some("users_phone_live_idx") => DomainError::PhoneAlreadyRegistered,
                _ => DomainError::DatabaseError(format!("unexpected unique violation: {db_err}")),
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Id) -> DomainError {
    DomainError::UserNotFound(id)
}
