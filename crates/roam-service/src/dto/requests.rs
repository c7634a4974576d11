//! Request DTOs for API endpoints
//!
//! Simple requests carry their presence checks as `validator` rules. The
//! signup request is deliberately loose - every field an `Option` - because
//! the lifecycle service applies its checks in a fixed order with
//! field-specific messages, and the boundary must not preempt that order.

use chrono::NaiveDate;
use roam_core::{Gender, IdentityField};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Signup Requests
// ============================================================================

/// Availability probe for a single identity field
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    /// Which unique field to probe; unknown names are rejected at deserialization
    pub field: IdentityField,

    #[validate(length(min = 1, message = "Field and value are required"))]
    pub value: String,
}

/// Account signup request
///
/// Validated by the lifecycle service, not here; see the module docs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub fullname: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub verification_method: Option<String>,
}

/// Verification by identifier (email or phone) plus code
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    #[validate(length(
        min = 1,
        message = "Identifier (email or phone) and verification code are required"
    ))]
    pub identifier: String,

    #[validate(length(
        min = 1,
        message = "Identifier (email or phone) and verification code are required"
    ))]
    pub code: String,
}

/// Phone verification request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPhoneRequest {
    #[validate(length(
        min = 1,
        message = "Phone number and verification code are required"
    ))]
    pub phone_number: String,

    #[validate(length(
        min = 1,
        message = "Phone number and verification code are required"
    ))]
    pub code: String,
}

/// Resend a verification code to whichever channel the identifier names
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendCodeRequest {
    #[validate(length(min = 1, message = "Email or phone number is required"))]
    pub identifier: String,
}

/// Resend the email verification code
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendEmailRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Resend the phone verification code
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendPhoneRequest {
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
}

// ============================================================================
// Session Requests
// ============================================================================

/// Sign-in request: identifier is email, nickname, or phone number
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    #[validate(length(
        min = 1,
        message = "Please provide identifier (email/nickname/phone) and password"
    ))]
    pub identifier: String,

    #[validate(length(
        min = 1,
        message = "Please provide identifier (email/nickname/phone) and password"
    ))]
    pub password: String,
}

// ============================================================================
// Password Recovery Requests
// ============================================================================

/// Start password recovery
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Check a reset code without consuming it
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResetCodeRequest {
    #[validate(length(min = 1, message = "Email and reset code are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Email and reset code are required"))]
    pub code: String,
}

/// Complete password recovery
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(length(
        min = 1,
        message = "Email, reset code, and new password are required"
    ))]
    pub email: String,

    #[validate(length(
        min = 1,
        message = "Email, reset code, and new password are required"
    ))]
    pub code: String,

    #[validate(length(
        min = 1,
        message = "Email, reset code, and new password are required"
    ))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_field_parses_camel_case() {
        let request: CheckAvailabilityRequest =
            serde_json::from_str(r#"{"field": "phoneNumber", "value": "+15551234567"}"#).unwrap();
        assert_eq!(request.field, IdentityField::PhoneNumber);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_availability_rejects_unknown_field() {
        let result = serde_json::from_str::<CheckAvailabilityRequest>(
            r#"{"field": "password", "value": "x"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_availability_rejects_empty_value() {
        let request: CheckAvailabilityRequest =
            serde_json::from_str(r#"{"field": "email", "value": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_accepts_partial_payload() {
        // The service reports missing fields with its own ordering
        let request: SignupRequest =
            serde_json::from_str(r#"{"email": "ana@x.com"}"#).unwrap();
        assert!(request.fullname.is_none());
        assert_eq!(request.email.as_deref(), Some("ana@x.com"));
    }

    #[test]
    fn test_signin_presence_rule() {
        let request: SigninRequest =
            serde_json::from_str(r#"{"identifier": "", "password": "secret1"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: SigninRequest =
            serde_json::from_str(r#"{"identifier": "ana_99", "password": "secret1"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
