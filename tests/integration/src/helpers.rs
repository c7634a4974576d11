//! Test helpers for integration tests
//!
//! Provides utilities for spawning in-process test servers, making HTTP
//! requests, and reading one-time codes straight from the database (the
//! test's stand-in for a mailbox or phone).

use std::net::SocketAddr;

use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use roam_api::{create_app, create_app_state};
use roam_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, NotifyConfig,
    NotifyMode, RateLimitConfig, ServerConfig,
};
use serde::Serialize;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Check whether the test environment is configured; tests return early
/// when it is not
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping integration test: DATABASE_URL not set");
        return false;
    }
    true
}

fn test_config() -> Result<AppConfig> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "roam".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-key".to_string(),
            token_expiry: 604_800,
        },
        notify: NotifyConfig {
            mode: NotifyMode::Log,
            email_from: "no-reply@roam.test".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            email_endpoint: None,
            sms_endpoint: None,
            api_key: None,
        },
        rate_limit: RateLimitConfig {
            // High enough that the tests themselves never trip it
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new in-process test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        let state = create_app_state(config).await?;
        let pool = state.pool().clone();
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            client: Client::new(),
            pool,
            _handle: handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET a path without authentication
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// GET a path with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// POST a JSON body without authentication
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Read the outstanding verification code for an email, as the mailbox
    /// would see it
    pub async fn verification_code(&self, email: &str) -> Result<String> {
        let code = sqlx::query_scalar::<_, Option<String>>(
            "SELECT verification_code FROM users WHERE email = lower($1) AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        code.context("no outstanding verification code")
    }

    /// Read the outstanding password reset code for an email
    pub async fn reset_code(&self, email: &str) -> Result<String> {
        let code = sqlx::query_scalar::<_, Option<String>>(
            "SELECT password_reset_code FROM users WHERE email = lower($1) AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        code.context("no outstanding reset code")
    }
}

/// Assert a response status, consuming the body into the failure message
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("expected {expected}, got {status}: {body}");
    }
    Ok(())
}

/// Assert a response status and parse the JSON body
pub async fn assert_json(
    response: Response,
    expected: StatusCode,
) -> Result<serde_json::Value> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status != expected {
        anyhow::bail!("expected {expected}, got {status}: {body}");
    }
    serde_json::from_str(&body).with_context(|| format!("invalid JSON body: {body}"))
}
