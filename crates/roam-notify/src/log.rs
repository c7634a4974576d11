//! Development notifier that logs instead of delivering
//!
//! Mirrors running without gateway credentials: the code lands in the log so
//! a developer can copy it into the verification flow by hand.

use async_trait::async_trait;
use tracing::info;

use crate::{Notifier, NotifyResult};

/// Local dev notifier - every send is logged and succeeds
#[derive(Debug, Clone)]
pub struct LogNotifier {
    app_name: String,
    frontend_url: String,
}

impl LogNotifier {
    /// Create a new LogNotifier
    #[must_use]
    pub fn new(app_name: &str, frontend_url: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            frontend_url: frontend_url.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_verification_email(&self, to: &str, token: &str, name: &str) -> NotifyResult {
        info!(
            to,
            name,
            url = %format!("{}/verify-email/{token}", self.frontend_url),
            "verification email (log mode)"
        );
        Ok(())
    }

    async fn send_verification_sms(&self, to: &str, code: &str) -> NotifyResult {
        info!(to, code, app = %self.app_name, "verification SMS (log mode)");
        Ok(())
    }

    async fn send_welcome_email(&self, to: &str, name: &str) -> NotifyResult {
        info!(to, name, "welcome email (log mode)");
        Ok(())
    }

    async fn send_password_reset_email(&self, to: &str, code: &str, name: &str) -> NotifyResult {
        info!(to, name, code, "password reset email (log mode)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_always_succeeds() {
        let notifier = LogNotifier::new("roam", "http://localhost:5173");

        assert!(notifier
            .send_verification_email("ana@x.com", "abc123", "Ana")
            .await
            .is_ok());
        assert!(notifier
            .send_verification_sms("+15551234567", "123456")
            .await
            .is_ok());
        assert!(notifier.send_welcome_email("ana@x.com", "Ana").await.is_ok());
        assert!(notifier
            .send_password_reset_email("ana@x.com", "654321", "Ana")
            .await
            .is_ok());
    }
}
