//! API integration tests
//!
//! These tests require a running PostgreSQL instance and the
//! `DATABASE_URL` environment variable. They spin the server up
//! in-process and drive the public HTTP surface end to end.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::fixtures::SignupPayload;
use integration_tests::helpers::{assert_json, assert_status};
use integration_tests::{check_test_env, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Signup
// ============================================================================

#[tokio::test]
async fn test_signup_creates_pending_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();

    let response = server.post("/auth/signup", &payload).await.unwrap();
    let body = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["user"]["accountStatus"], "pending");
    assert_eq!(body["user"]["verification"]["email"], false);
    assert_eq!(body["user"]["verification"]["phone"], false);
    assert_eq!(body["user"]["nickname"], payload.nickname);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_signup_conflict_reports_email_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();

    server.post("/auth/signup", &payload).await.unwrap();

    // Same email, nickname, and phone: email wins the conflict report
    let response = server.post("/auth/signup", &payload).await.unwrap();
    let body = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body["error"]["details"]["field"], "email");

    // Same nickname only
    let mut nickname_clash = SignupPayload::unique_email();
    nickname_clash.nickname = payload.nickname.clone();
    let response = server.post("/auth/signup", &nickname_clash).await.unwrap();
    let body = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body["error"]["details"]["field"], "nickname");
}

#[tokio::test]
async fn test_signup_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    // Under 18
    let mut underage = serde_json::to_value(SignupPayload::unique_email()).unwrap();
    underage["dateOfBirth"] = json!("2015-01-01");
    let response = server.post("/auth/signup", &underage).await.unwrap();
    let body = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "UNDER_MINIMUM_AGE");

    // Bad nickname
    let mut bad_nickname = SignupPayload::unique_email();
    bad_nickname.nickname = "no".to_string();
    let response = server.post("/auth/signup", &bad_nickname).await.unwrap();
    let body = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_NICKNAME");

    // Missing verification method
    let mut no_method = serde_json::to_value(SignupPayload::unique_email()).unwrap();
    no_method["verificationMethod"] = json!(null);
    let response = server.post("/auth/signup", &no_method).await.unwrap();
    let body = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_VERIFICATION_METHOD");
}

#[tokio::test]
async fn test_check_availability() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();

    let probe = json!({ "field": "nickname", "value": payload.nickname });
    let response = server.post("/auth/check-availability", &probe).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["available"], true);

    server.post("/auth/signup", &payload).await.unwrap();

    // Case-insensitive: the uppercased nickname is now taken too
    let probe = json!({ "field": "nickname", "value": payload.nickname.to_uppercase() });
    let response = server.post("/auth/check-availability", &probe).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["available"], false);

    // Unknown field names are rejected
    let probe = json!({ "field": "password", "value": "x" });
    let response = server.post("/auth/check-availability", &probe).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Verification
// ============================================================================

#[tokio::test]
async fn test_verify_code_activates_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();
    server.post("/auth/signup", &payload).await.unwrap();

    let code = server.verification_code(&payload.email).await.unwrap();

    let request = json!({ "identifier": payload.email, "code": code });
    let response = server.post("/auth/verify-code", &request).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["user"]["accountStatus"], "active");
    assert_eq!(body["user"]["verified"], true);

    // The code is single-use
    let response = server.post("/auth/verify-code", &request).await.unwrap();
    let body = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_VERIFICATION_CODE");
}

#[tokio::test]
async fn test_email_link_verification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();
    server.post("/auth/signup", &payload).await.unwrap();

    let token = server.verification_code(&payload.email).await.unwrap();

    let response = server
        .get(&format!("/auth/verify-email/{token}"))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["accountStatus"], "active");
}

#[tokio::test]
async fn test_resend_invalidates_previous_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();
    server.post("/auth/signup", &payload).await.unwrap();

    let stale = server.verification_code(&payload.email).await.unwrap();

    let request = json!({ "identifier": payload.email });
    let response = server.post("/auth/resend-code", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let fresh = server.verification_code(&payload.email).await.unwrap();
    assert_ne!(stale, fresh);

    // The stale code no longer verifies
    let request = json!({ "identifier": payload.email, "code": stale });
    let response = server.post("/auth/verify-code", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // The fresh one does
    let request = json!({ "identifier": payload.email, "code": fresh });
    let response = server.post("/auth/verify-code", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_resend_for_verified_account_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();
    server.post("/auth/signup", &payload).await.unwrap();

    let code = server.verification_code(&payload.email).await.unwrap();
    let request = json!({ "identifier": payload.email, "code": code });
    server.post("/auth/verify-code", &request).await.unwrap();

    let request = json!({ "email": payload.email });
    let response = server
        .post("/auth/resend-verification-email", &request)
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "ALREADY_VERIFIED");

    // Unknown identifiers are a 404 on resend
    let request = json!({ "identifier": "+15550000001" });
    let response = server.post("/auth/resend-code", &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Sign-in and lockout
// ============================================================================

/// Sign up and verify, returning the account's email
async fn verified_account(server: &TestServer) -> SignupPayload {
    let payload = SignupPayload::unique_email();
    server.post("/auth/signup", &payload).await.unwrap();
    let code = server.verification_code(&payload.email).await.unwrap();
    let request = json!({ "identifier": payload.email, "code": code });
    let response = server.post("/auth/verify-code", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    payload
}

#[tokio::test]
async fn test_signin_pending_account_needs_verification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = SignupPayload::unique_email();
    server.post("/auth/signup", &payload).await.unwrap();

    let request = json!({ "identifier": payload.email, "password": payload.password });
    let response = server.post("/auth/signin", &request).await.unwrap();
    let body = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NEEDS_VERIFICATION");
    assert_eq!(body["error"]["details"]["verificationMethod"], "email");
}

#[tokio::test]
async fn test_signin_by_nickname_and_trust_score() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = verified_account(&server).await;

    // Nickname works as identifier, case-insensitively
    let request = json!({
        "identifier": payload.nickname.to_uppercase(),
        "password": payload.password,
    });
    let response = server.post("/auth/signin", &request).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();

    // Email verified: 20 points
    assert_eq!(body["user"]["trustScore"], 20);
    assert_eq!(body["user"]["verification"]["email"], true);

    // Generic rejection for a wrong password
    let request = json!({ "identifier": payload.nickname, "password": "wrong-password" });
    let response = server.post("/auth/signin", &request).await.unwrap();
    let body = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["message"], "Invalid credentials");

    // ... identical to the rejection for an unknown identifier
    let request = json!({ "identifier": "nobody_here_404", "password": "wrong-password" });
    let response = server.post("/auth/signin", &request).await.unwrap();
    let body = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_lockout_after_five_failures() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = verified_account(&server).await;

    let wrong = json!({ "identifier": payload.email, "password": "wrong-password" });
    for _ in 0..5 {
        let response = server.post("/auth/signin", &wrong).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    // The lock now rejects even the correct password
    let correct = json!({ "identifier": payload.email, "password": payload.password });
    let response = server.post("/auth/signin", &correct).await.unwrap();
    let body = assert_json(response, StatusCode::LOCKED).await.unwrap();
    assert_eq!(body["error"]["code"], "ACCOUNT_LOCKED");
    assert!(body["error"]["details"]["lockUntil"].is_string());
}

// ============================================================================
// Password recovery
// ============================================================================

#[tokio::test]
async fn test_forgot_password_does_not_reveal_accounts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = verified_account(&server).await;

    let request = json!({ "email": payload.email });
    let response = server.post("/auth/forgot-password", &request).await.unwrap();
    let existing = assert_json(response, StatusCode::OK).await.unwrap();

    let request = json!({ "email": "no-such-account@example.com" });
    let response = server.post("/auth/forgot-password", &request).await.unwrap();
    let missing = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(existing["message"], missing["message"]);
}

#[tokio::test]
async fn test_reset_password_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = verified_account(&server).await;

    let request = json!({ "email": payload.email });
    server.post("/auth/forgot-password", &request).await.unwrap();
    let code = server.reset_code(&payload.email).await.unwrap();

    // The code validates without being consumed
    let request = json!({ "email": payload.email, "code": code });
    let response = server.post("/auth/verify-reset-code", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A wrong code is rejected and changes nothing
    let request = json!({
        "email": payload.email,
        "code": "000000",
        "newPassword": "hijacked",
    });
    let response = server.post("/auth/reset-password", &request).await.unwrap();
    let body = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_RESET_CODE");

    // The real code replaces the credential
    let request = json!({
        "email": payload.email,
        "code": code,
        "newPassword": "fresh-secret",
    });
    let response = server.post("/auth/reset-password", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password out, new password in
    let request = json!({ "identifier": payload.email, "password": payload.password });
    let response = server.post("/auth/signin", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let request = json!({ "identifier": payload.email, "password": "fresh-secret" });
    let response = server.post("/auth/signin", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Access guard and profiles
// ============================================================================

#[tokio::test]
async fn test_me_requires_active_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    // No token
    let response = server.get("/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Garbage token
    let response = server.get_auth("/auth/me", "not.a.jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Pending account: the signup token is real, but the guard wants active
    let payload = SignupPayload::unique_email();
    let response = server.post("/auth/signup", &payload).await.unwrap();
    let body = assert_json(response, StatusCode::CREATED).await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();

    let response = server.get_auth("/auth/me", &token).await.unwrap();
    let body = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["message"], "Account is pending");
}

#[tokio::test]
async fn test_profile_privacy_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = verified_account(&server).await;

    let request = json!({ "identifier": payload.email, "password": payload.password });
    let response = server.post("/auth/signin", &request).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    // Anonymous viewer: email hidden by the default privacy toggles
    let response = server
        .get(&format!("/users/{user_id}/profile"))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["data"].get("email").is_none());
    assert_eq!(body["data"]["nickname"], payload.nickname);

    // The owner sees everything
    let response = server.get_auth("/users/me/profile", &token).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["email"], payload.email);

    // Unknown profile is a 404
    let response = server
        .get(&format!("/users/{}/profile", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_complete_profile_aggregates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = verified_account(&server).await;

    let request = json!({ "identifier": payload.email, "password": payload.password });
    let response = server.post("/auth/signin", &request).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    // Anonymous viewer gets the aggregate without owner-only lists
    let response = server
        .get(&format!("/users/{user_id}/profile/complete"))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["data"]["trips"].is_array());
    assert_eq!(body["data"]["bookings"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["stats"]["trustScore"], 20);

    // The owner additionally gets bookings and reviews given
    let response = server
        .get_auth(&format!("/users/{user_id}/profile/complete"), &token)
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["data"]["reviewsGiven"].is_array());
}
