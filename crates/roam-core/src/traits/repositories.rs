//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All lookups exclude soft-deleted rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Booking, IdentityField, IssuedVerification, Review, Trip, User, Vehicle};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Outcome of a recorded failed sign-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginAttempt {
    /// Counter value after the increment
    pub attempts: i32,
    /// Lock expiry, when the increment tripped (or kept) a lock
    pub locked_until: Option<DateTime<Utc>>,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by ID including soft-deleted rows
    ///
    /// Only the access guard uses this, to distinguish a deleted account
    /// from an unknown one.
    async fn find_any_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by exact phone number
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<User>>;

    /// Find user by email or nickname (case-insensitive) or exact phone number
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>>;

    /// Check whether an identity field value is already taken
    async fn identity_taken(&self, field: IdentityField, value: &str) -> RepoResult<bool>;

    /// Find any live account colliding with the given email, nickname, or phone
    async fn find_conflicting(
        &self,
        email: &str,
        nickname: &str,
        phone_number: &str,
    ) -> RepoResult<Option<User>>;

    /// Create a new account together with its credential and first
    /// verification secret
    async fn create(
        &self,
        user: &User,
        password_hash: &str,
        verification: &IssuedVerification,
    ) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>>;

    /// Find a user holding an unexpired verification code, matched by email
    /// or phone identifier
    async fn find_by_verification_code(
        &self,
        identifier: &str,
        code: &str,
    ) -> RepoResult<Option<User>>;

    /// Find a user by an unexpired email verification token
    async fn find_by_email_token(&self, token: &str) -> RepoResult<Option<User>>;

    /// Find a user by phone number and unexpired verification code
    async fn find_by_phone_code(&self, phone_number: &str, code: &str) -> RepoResult<Option<User>>;

    /// Overwrite the outstanding verification secret (invalidates any prior one)
    async fn store_verification(
        &self,
        id: Id,
        verification: &IssuedVerification,
    ) -> RepoResult<()>;

    /// Persist a completed verification transition: channel flags, timestamp,
    /// trust score, status promotion, and clearing of the one-time secret
    async fn apply_verification(&self, user: &User) -> RepoResult<()>;

    /// Atomically record a failed sign-in attempt, setting the lock when the
    /// incremented counter reaches the threshold
    async fn record_failed_login(&self, id: Id) -> RepoResult<LoginAttempt>;

    /// Record a successful sign-in: reset the attempt counter and lock, stamp
    /// last-login and last-active
    async fn record_login(&self, id: Id) -> RepoResult<()>;

    /// Overwrite the outstanding password-reset secret
    async fn store_password_reset(
        &self,
        id: Id,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Find a user by email and unexpired password-reset code
    async fn find_by_reset_code(&self, email: &str, code: &str) -> RepoResult<Option<User>>;

    /// Replace the credential, clearing the reset secret and the lock state
    /// in the same statement
    async fn replace_password(&self, id: Id, password_hash: &str) -> RepoResult<()>;

    /// Soft delete an account, hiding it from all subsequent lookups
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Activity Repositories
// ============================================================================

#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Most recent profile-visible trips offered by a driver
    async fn recent_by_driver(&self, driver_id: Id, limit: i64) -> RepoResult<Vec<Trip>>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Most recent bookings made by a guest
    async fn recent_by_guest(&self, guest_id: Id, limit: i64) -> RepoResult<Vec<Booking>>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Visible reviews received by a user
    async fn visible_received(&self, recipient_id: Id, limit: i64) -> RepoResult<Vec<Review>>;

    /// Reviews written by a user (own profile only)
    async fn given_by(&self, author_id: Id, limit: i64) -> RepoResult<Vec<Review>>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Active vehicles registered by an owner
    async fn active_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Vehicle>>;
}
