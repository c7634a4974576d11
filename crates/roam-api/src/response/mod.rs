//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting. Every
//! error leaves as `{"error": {"code", "message", "details?"}}`; the 423
//! lock response carries `lockUntil` in `details` and the pending-
//! verification 403 carries the pending channel.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roam_common::AppError;
use roam_core::DomainError;
use roam_service::ServiceError;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Not authorized. Please sign in")]
    MissingAuth,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_validation() {
                    StatusCode::BAD_REQUEST
                } else if e.is_conflict() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingAuth => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::MissingAuth => "MISSING_AUTH",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Structured context for clients, when the error carries any
    fn details(&self) -> Option<serde_json::Value> {
        let app_error = match self {
            Self::App(e) => Some(e),
            Self::Service(ServiceError::App(e)) => Some(e),
            _ => None,
        };

        if let Some(e) = app_error {
            match e {
                AppError::Locked { locked_until } => {
                    return Some(json!({ "lockUntil": locked_until }));
                }
                AppError::PendingVerification { method } => {
                    return Some(json!({
                        "needsVerification": true,
                        "verificationMethod": method,
                    }));
                }
                _ => {}
            }
        }

        let domain_error = match self {
            Self::Domain(e) => Some(e),
            Self::Service(ServiceError::Domain(e)) => Some(e),
            Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        };
        if let Some(field) = domain_error.and_then(DomainError::conflict_field) {
            return Some(json!({ "field": field }));
        }

        if let Self::Validation(errors) = self {
            return serde_json::to_value(errors).ok();
        }

        None
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();
        let message = self.to_string();
        let details = self.details();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingAuth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::invalid_path("bad id").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::App(AppError::Locked { locked_until: None }).status_code(),
            StatusCode::LOCKED
        );
        assert_eq!(
            ApiError::Domain(DomainError::NicknameAlreadyTaken).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_lock_details_carry_expiry() {
        let until = Utc::now();
        let err = ApiError::App(AppError::Locked {
            locked_until: Some(until),
        });
        let details = err.details().unwrap();
        assert!(details.get("lockUntil").is_some());
    }

    #[test]
    fn test_pending_verification_details() {
        let err = ApiError::App(AppError::PendingVerification {
            method: Some(roam_core::VerificationChannel::Email),
        });
        let details = err.details().unwrap();
        assert_eq!(details["needsVerification"], true);
        assert_eq!(details["verificationMethod"], "email");
    }

    #[test]
    fn test_conflict_details_name_the_field() {
        let err = ApiError::Domain(DomainError::PhoneAlreadyRegistered);
        let details = err.details().unwrap();
        assert_eq!(details["field"], "phoneNumber");
    }
}
