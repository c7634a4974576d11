//! Route definitions
//!
//! Auth and user routes, with health probes exported separately so they
//! bypass rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health probes)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/check-availability", post(auth::check_availability))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/verify-code", post(auth::verify_code))
        .route("/auth/verify-email/:token", get(auth::verify_email))
        .route("/auth/verify-phone", post(auth::verify_phone))
        .route("/auth/resend-code", post(auth::resend_code))
        .route(
            "/auth/resend-verification-email",
            post(auth::resend_verification_email),
        )
        .route(
            "/auth/resend-verification-phone",
            post(auth::resend_verification_phone),
        )
        .route("/auth/signin", post(auth::signin))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/verify-reset-code", post(auth::verify_reset_code))
        .route("/auth/reset-password", post(auth::reset_password))
        .route("/auth/me", get(auth::me))
}

/// User profile routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me/profile", get(users::get_my_profile))
        .route("/users/:user_id/profile", get(users::get_public_profile))
        .route(
            "/users/:user_id/profile/complete",
            get(users::get_complete_profile),
        )
}
