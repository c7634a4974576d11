//! Test fixtures
//!
//! Unique signup payloads so tests can run against a shared database
//! without colliding with each other or with earlier runs.

use serde::Serialize;
use uuid::Uuid;

/// Signup payload with unique identity fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub fullname: String,
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub verification_method: String,
}

impl SignupPayload {
    /// A fresh account signing up over the email channel
    pub fn unique_email() -> Self {
        let tag = short_tag();
        Self {
            fullname: "Ana Lee".to_string(),
            nickname: format!("ana_{tag}"),
            email: format!("ana_{tag}@example.com"),
            password: "secret1".to_string(),
            phone_number: unique_phone(),
            verification_method: "email".to_string(),
        }
    }

    /// A fresh account signing up over the phone channel
    pub fn unique_phone_method() -> Self {
        let mut payload = Self::unique_email();
        payload.verification_method = "phone".to_string();
        payload
    }
}

/// 8 hex chars, unique enough for a test database
fn short_tag() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// E.164-style phone number that will not collide
fn unique_phone() -> String {
    let digits = Uuid::new_v4().as_u128() % 1_000_000_000;
    format!("+33{digits:09}")
}
