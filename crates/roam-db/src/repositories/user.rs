//! PostgreSQL implementation of UserRepository
//!
//! Every lookup is scoped to live rows (`deleted_at IS NULL`). One-time
//! secrets are matched with their expiry directly in SQL, and the
//! failed-login counter is maintained with a single atomic UPDATE so two
//! concurrent sign-in attempts cannot race the lock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use roam_core::entities::{IdentityField, IssuedVerification, User};
use roam_core::traits::{LoginAttempt, RepoResult, UserRepository};
use roam_core::Id;

use crate::models::UserModel;

use super::error::{map_db_error, map_user_unique_violation, user_not_found};

/// Failed attempts that trip the lock
const MAX_LOGIN_ATTEMPTS: i32 = 5;
/// Lock duration once tripped
const LOCK_DURATION_MINUTES: i32 = 120;

/// Columns of the standard user projection (no password hash, no one-time codes)
const USER_COLUMNS: &str = "id, fullname, nickname, email, phone_number, date_of_birth, gender, \
     bio, profile_pic, cover_photo, current_location, roles, preferences, privacy, wallet, \
     driver_profile, passenger_profile, host_profile, stats, \
     verification_email, verification_phone, verification_identity, verified_at, verification_method, \
     trust_score, account_status, is_onboarded, onboarding_step, \
     failed_login_attempts, locked_until, blocked_users, \
     last_login, last_active, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_optional(&self, sql: &str, binds: &[&str]) -> RepoResult<Option<User>> {
        let mut query = sqlx::query_as::<_, UserModel>(sql);
        for bind in binds {
            query = query.bind(*bind);
        }
        let model = query
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let sql =
            format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        let model = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_any_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let model = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = lower($1) AND deleted_at IS NULL"
        );
        self.fetch_optional(&sql, &[email]).await
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE phone_number = $1 AND deleted_at IS NULL"
        );
        self.fetch_optional(&sql, &[phone_number]).await
    }

    #[instrument(skip(self))]
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE (email = lower($1) OR nickname = lower($1) OR phone_number = $1) \
             AND deleted_at IS NULL"
        );
        self.fetch_optional(&sql, &[identifier]).await
    }

    #[instrument(skip(self))]
    async fn identity_taken(&self, field: IdentityField, value: &str) -> RepoResult<bool> {
        // Explicit enum dispatch: each variant names exactly one column.
        let column = match field {
            IdentityField::Nickname => "nickname",
            IdentityField::Email => "email",
            IdentityField::PhoneNumber => "phone_number",
        };
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM users WHERE {column} = $1 AND deleted_at IS NULL)"
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_conflicting(
        &self,
        email: &str,
        nickname: &str,
        phone_number: &str,
    ) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE (email = $1 OR nickname = $2 OR phone_number = $3) \
             AND deleted_at IS NULL \
             LIMIT 1"
        );
        self.fetch_optional(&sql, &[email, nickname, phone_number])
            .await
    }

    #[instrument(skip(self, password_hash, verification))]
    async fn create(
        &self,
        user: &User,
        password_hash: &str,
        verification: &IssuedVerification,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (
                id, fullname, nickname, email, phone_number, password_hash,
                date_of_birth, gender,
                verification_code, verification_expires, verification_method,
                account_status, is_onboarded, onboarding_step,
                last_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.fullname)
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(password_hash)
        .bind(user.date_of_birth)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(&verification.code)
        .bind(verification.expires_at)
        .bind(verification.method.as_str())
        .bind(user.account_status.as_str())
        .bind(user.is_onboarded)
        .bind(user.onboarding_step)
        .bind(user.last_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, code))]
    async fn find_by_verification_code(
        &self,
        identifier: &str,
        code: &str,
    ) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE (email = lower($1) OR phone_number = $1) \
             AND verification_code = $2 \
             AND verification_expires > NOW() \
             AND deleted_at IS NULL"
        );
        self.fetch_optional(&sql, &[identifier, code]).await
    }

    #[instrument(skip(self, token))]
    async fn find_by_email_token(&self, token: &str) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE verification_code = $1 \
             AND verification_method = 'email' \
             AND verification_expires > NOW() \
             AND deleted_at IS NULL"
        );
        self.fetch_optional(&sql, &[token]).await
    }

    #[instrument(skip(self, code))]
    async fn find_by_phone_code(&self, phone_number: &str, code: &str) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE phone_number = $1 \
             AND verification_code = $2 \
             AND verification_expires > NOW() \
             AND deleted_at IS NULL"
        );
        self.fetch_optional(&sql, &[phone_number, code]).await
    }

    #[instrument(skip(self, verification))]
    async fn store_verification(
        &self,
        id: Id,
        verification: &IssuedVerification,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET verification_code = $2,
                verification_expires = $3,
                verification_method = $4,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(&verification.code)
        .bind(verification.expires_at)
        .bind(verification.method.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, user))]
    async fn apply_verification(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET verification_email = $2,
                verification_phone = $3,
                verification_identity = $4,
                verified_at = $5,
                trust_score = $6,
                account_status = $7,
                verification_code = NULL,
                verification_expires = NULL,
                verification_method = NULL,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(user.id.into_inner())
        .bind(user.verification.email)
        .bind(user.verification.phone)
        .bind(user.verification.identity)
        .bind(user.verification.verified_at)
        .bind(user.trust_score)
        .bind(user.account_status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_failed_login(&self, id: Id) -> RepoResult<LoginAttempt> {
        // Single statement: an expired lock resets the counter to 1 and
        // clears the lock; otherwise the counter increments and trips a new
        // lock when it reaches the threshold.
        let row = sqlx::query_as::<_, (i32, Option<DateTime<Utc>>)>(
            r"
            UPDATE users
            SET failed_login_attempts = CASE
                    WHEN locked_until IS NOT NULL AND locked_until < NOW() THEN 1
                    ELSE failed_login_attempts + 1
                END,
                locked_until = CASE
                    WHEN locked_until IS NOT NULL AND locked_until < NOW() THEN NULL
                    WHEN failed_login_attempts + 1 >= $2 AND locked_until IS NULL
                        THEN NOW() + make_interval(mins => $3)
                    ELSE locked_until
                END,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING failed_login_attempts, locked_until
            ",
        )
        .bind(id.into_inner())
        .bind(MAX_LOGIN_ATTEMPTS)
        .bind(LOCK_DURATION_MINUTES)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(id))?;

        Ok(LoginAttempt {
            attempts: row.0,
            locked_until: row.1,
        })
    }

    #[instrument(skip(self))]
    async fn record_login(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET failed_login_attempts = 0,
                locked_until = NULL,
                last_login = NOW(),
                last_active = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn store_password_reset(
        &self,
        id: Id,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_reset_code = $2,
                password_reset_expires = $3,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(code)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn find_by_reset_code(&self, email: &str, code: &str) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE email = lower($1) \
             AND password_reset_code = $2 \
             AND password_reset_expires > NOW() \
             AND deleted_at IS NULL"
        );
        self.fetch_optional(&sql, &[email, code]).await
    }

    #[instrument(skip(self, password_hash))]
    async fn replace_password(&self, id: Id, password_hash: &str) -> RepoResult<()> {
        // The reset secret and the lock state go away with the credential in
        // the same statement.
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2,
                password_reset_code = NULL,
                password_reset_expires = NULL,
                failed_login_attempts = 0,
                locked_until = NULL,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}
