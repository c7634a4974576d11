//! # roam-notify
//!
//! Notification dispatch behind a single `Notifier` trait.
//!
//! A dispatch is one attempt with no retry or queueing; whether a failure is
//! surfaced to the caller or merely logged is the caller's decision. The
//! default for development is [`LogNotifier`], which writes the code to the
//! log instead of delivering anything. [`HttpNotifier`] posts JSON to
//! configured email/SMS gateway endpoints.

mod http;
mod log;

use std::sync::Arc;

use async_trait::async_trait;
use roam_common::{NotifyConfig, NotifyMode};

pub use http::HttpNotifier;
pub use log::LogNotifier;

/// Notification delivery errors
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification gateway not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Failed to send {kind}: {reason}")]
    SendFailed { kind: &'static str, reason: String },
}

/// Result type for dispatch operations
pub type NotifyResult = Result<(), NotifyError>;

/// Outbound notification port
///
/// Verification emails carry an opaque token embedded in a link; SMS and
/// password-reset mails carry a short numeric code.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send an email verification link
    async fn send_verification_email(&self, to: &str, token: &str, name: &str) -> NotifyResult;

    /// Send an SMS verification code
    async fn send_verification_sms(&self, to: &str, code: &str) -> NotifyResult;

    /// Send the post-verification welcome email
    async fn send_welcome_email(&self, to: &str, name: &str) -> NotifyResult;

    /// Send a password reset code by email
    async fn send_password_reset_email(&self, to: &str, code: &str, name: &str) -> NotifyResult;
}

/// Build the notifier selected by configuration
#[must_use]
pub fn build_notifier(config: &NotifyConfig, app_name: &str) -> Arc<dyn Notifier> {
    match config.mode {
        NotifyMode::Log => Arc::new(LogNotifier::new(app_name, &config.frontend_url)),
        NotifyMode::Http => Arc::new(HttpNotifier::new(config, app_name)),
    }
}
