//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Please provide all required fields")]
    MissingRequiredFields,

    #[error("Please select a verification method (email or phone)")]
    InvalidVerificationMethod,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Nickname must be 3-20 characters and contain only letters, numbers and underscores")]
    InvalidNickname,

    #[error("Invalid phone number format")]
    InvalidPhoneNumber,

    #[error("You must be at least 18 years old to register")]
    UnderMinimumAge,

    #[error("Invalid or expired verification code")]
    VerificationCodeInvalid,

    #[error("Invalid or expired reset code")]
    ResetCodeInvalid,

    #[error("{0} is already verified")]
    AlreadyVerified(&'static str),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Nickname is already taken")]
    NicknameAlreadyTaken,

    #[error("Phone number is already registered")]
    PhoneAlreadyRegistered,

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
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::InvalidVerificationMethod => "INVALID_VERIFICATION_METHOD",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::PasswordTooShort { .. } => "PASSWORD_TOO_SHORT",
            Self::InvalidNickname => "INVALID_NICKNAME",
            Self::InvalidPhoneNumber => "INVALID_PHONE_NUMBER",
            Self::UnderMinimumAge => "UNDER_MINIMUM_AGE",
            Self::VerificationCodeInvalid => "INVALID_VERIFICATION_CODE",
            Self::ResetCodeInvalid => "INVALID_RESET_CODE",
            Self::AlreadyVerified(_) => "ALREADY_VERIFIED",

            // Conflict
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::NicknameAlreadyTaken => "NICKNAME_ALREADY_TAKEN",
            Self::PhoneAlreadyRegistered => "PHONE_ALREADY_REGISTERED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// The conflicting signup field, for 409 responses
    pub fn conflict_field(&self) -> Option<&'static str> {
        match self {
            Self::EmailAlreadyRegistered => Some("email"),
            Self::NicknameAlreadyTaken => Some("nickname"),
            Self::PhoneAlreadyRegistered => Some("phoneNumber"),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingRequiredFields
                | Self::InvalidVerificationMethod
                | Self::InvalidEmail
                | Self::PasswordTooShort { .. }
                | Self::InvalidNickname
                | Self::InvalidPhoneNumber
                | Self::UnderMinimumAge
                | Self::VerificationCodeInvalid
                | Self::ResetCodeInvalid
                | Self::AlreadyVerified(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyRegistered | Self::NicknameAlreadyTaken | Self::PhoneAlreadyRegistered
        )
    }
}
