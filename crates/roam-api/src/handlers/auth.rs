//! Authentication handlers
//!
//! Endpoints for availability checks, signup, verification, sign-in, and
//! password recovery.

use axum::{
    extract::{Path, State},
    Json,
};
use roam_service::{
    AccountService, AvailabilityResponse, CheckAvailabilityRequest, ForgotPasswordRequest,
    FullProfileResponse, MessageResponse, ResendCodeRequest, ResendEmailRequest,
    ResendPhoneRequest, ResetPasswordRequest, SigninRequest, SigninResponse, SignupRequest,
    SignupResponse, VerificationResultResponse, VerifyCodeRequest, VerifyPhoneRequest,
    VerifyResetCodeRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Check whether a nickname, email, or phone number is free
///
/// POST /auth/check-availability
pub async fn check_availability(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CheckAvailabilityRequest>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.check_availability(request).await?;
    Ok(Json(response))
}

/// Register a new account
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<Created<Json<SignupResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Verify with an identifier and code
///
/// POST /auth/verify-code
pub async fn verify_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyCodeRequest>,
) -> ApiResult<Json<VerificationResultResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.verify_code(request).await?;
    Ok(Json(response))
}

/// Verify via the emailed link token
///
/// GET /auth/verify-email/:token
pub async fn verify_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<Json<VerificationResultResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.verify_email_token(&token).await?;
    Ok(Json(response))
}

/// Verify a phone number with its SMS code
///
/// POST /auth/verify-phone
pub async fn verify_phone(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyPhoneRequest>,
) -> ApiResult<Json<VerificationResultResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.verify_phone(request).await?;
    Ok(Json(response))
}

/// Resend a verification code by email or phone identifier
///
/// POST /auth/resend-code
pub async fn resend_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResendCodeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.resend_code(request).await?;
    Ok(Json(response))
}

/// Resend the email verification code
///
/// POST /auth/resend-verification-email
pub async fn resend_verification_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResendEmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.resend_email(request).await?;
    Ok(Json(response))
}

/// Resend the phone verification code
///
/// POST /auth/resend-verification-phone
pub async fn resend_verification_phone(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResendPhoneRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.resend_phone(request).await?;
    Ok(Json(response))
}

/// Sign in with an identifier and password
///
/// POST /auth/signin
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SigninRequest>,
) -> ApiResult<Json<SigninResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.signin(request).await?;
    Ok(Json(response))
}

/// Start password recovery
///
/// POST /auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ForgotPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.forgot_password(request).await?;
    Ok(Json(response))
}

/// Check a reset code without consuming it
///
/// POST /auth/verify-reset-code
pub async fn verify_reset_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyResetCodeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.verify_reset_code(request).await?;
    Ok(Json(response))
}

/// Complete password recovery
///
/// POST /auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.reset_password(request).await?;
    Ok(Json(response))
}

/// Get the authenticated account
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<FullProfileResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.me(auth.user_id()).await?;
    Ok(Json(response))
}
