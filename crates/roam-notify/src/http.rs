//! HTTP gateway notifier
//!
//! Posts JSON to configured email and SMS gateway endpoints. A non-2xx
//! response or transport error is a failed dispatch; there is exactly one
//! attempt per call.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use roam_common::NotifyConfig;

use crate::{Notifier, NotifyError, NotifyResult};

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: String,
}

#[derive(Debug, Serialize)]
struct SmsPayload<'a> {
    to: &'a str,
    body: String,
}

/// Gateway-backed notifier
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    http: Client,
    app_name: String,
    email_from: String,
    frontend_url: String,
    email_endpoint: Option<String>,
    sms_endpoint: Option<String>,
    api_key: Option<String>,
}

impl HttpNotifier {
    /// Create a new HttpNotifier from configuration
    #[must_use]
    pub fn new(config: &NotifyConfig, app_name: &str) -> Self {
        Self {
            http: Client::new(),
            app_name: app_name.to_string(),
            email_from: config.email_from.clone(),
            frontend_url: config.frontend_url.clone(),
            email_endpoint: config.email_endpoint.clone(),
            sms_endpoint: config.sms_endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    async fn post<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        kind: &'static str,
        payload: &T,
    ) -> NotifyResult {
        let mut request = self.http.post(endpoint).json(payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| NotifyError::SendFailed {
            kind,
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(NotifyError::SendFailed {
                kind,
                reason: format!("gateway returned {}", response.status()),
            });
        }

        debug!(kind, endpoint, "notification dispatched");
        Ok(())
    }

    async fn send_email(&self, to: &str, subject: &str, body: String) -> NotifyResult {
        let endpoint = self
            .email_endpoint
            .as_deref()
            .ok_or(NotifyError::NotConfigured("email endpoint"))?;

        let payload = EmailPayload {
            from: &self.email_from,
            to,
            subject,
            body,
        };
        self.post(endpoint, "email", &payload).await
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send_verification_email(&self, to: &str, token: &str, name: &str) -> NotifyResult {
        let url = format!("{}/verify-email/{token}", self.frontend_url);
        let body = format!(
            "Hi {name},\n\nVerify your email address to activate your {} account:\n{url}\n\n\
             This link expires in 30 minutes. If you did not sign up, you can ignore this message.",
            self.app_name
        );
        self.send_email(to, "Verify your email address", body).await
    }

    async fn send_verification_sms(&self, to: &str, code: &str) -> NotifyResult {
        let endpoint = self
            .sms_endpoint
            .as_deref()
            .ok_or(NotifyError::NotConfigured("sms endpoint"))?;

        let payload = SmsPayload {
            to,
            body: format!(
                "Your {} code is: {code}\n\nThis code will expire in 30 minutes",
                self.app_name
            ),
        };
        self.post(endpoint, "sms", &payload).await
    }

    async fn send_welcome_email(&self, to: &str, name: &str) -> NotifyResult {
        let body = format!(
            "Hi {name},\n\nYour account is verified - welcome to {}!\n\n\
             Publish a trip, list a place, or find people heading your way.",
            self.app_name
        );
        self.send_email(to, &format!("Welcome to {}", self.app_name), body)
            .await
    }

    async fn send_password_reset_email(&self, to: &str, code: &str, name: &str) -> NotifyResult {
        let body = format!(
            "Hi {name},\n\nYour password reset code is: {code}\n\n\
             The code expires in 30 minutes. If you did not request a reset, you can ignore this message."
        );
        self.send_email(to, "Reset your password", body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roam_common::NotifyMode;

    fn unconfigured() -> HttpNotifier {
        HttpNotifier::new(
            &NotifyConfig {
                mode: NotifyMode::Http,
                email_from: "no-reply@roam.dev".to_string(),
                frontend_url: "http://localhost:5173".to_string(),
                email_endpoint: None,
                sms_endpoint: None,
                api_key: None,
            },
            "roam",
        )
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_an_error() {
        let notifier = unconfigured();

        let email = notifier.send_verification_email("a@x.com", "tok", "Ana").await;
        assert!(matches!(email, Err(NotifyError::NotConfigured(_))));

        let sms = notifier.send_verification_sms("+15551234567", "123456").await;
        assert!(matches!(sms, Err(NotifyError::NotConfigured(_))));
    }
}
