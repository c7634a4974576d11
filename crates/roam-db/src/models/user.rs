//! User database model
//!
//! JSONB columns hold the nested profile documents; enum-like columns are
//! stored as text and parsed in the mapper. The password hash and the
//! one-time verification/reset codes are not part of this projection: they
//! are matched in WHERE clauses and fetched by dedicated queries only.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use roam_core::{
    DriverProfile, GeoLocation, HostProfile, PassengerProfile, Preferences, PrivacySettings,
    TravelStats, Wallet,
};

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub fullname: String,
    pub nickname: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub bio: String,
    pub profile_pic: String,
    pub cover_photo: String,
    pub current_location: Option<Json<GeoLocation>>,
    pub roles: Vec<String>,
    pub preferences: Json<Preferences>,
    pub privacy: Json<PrivacySettings>,
    pub wallet: Json<Wallet>,
    pub driver_profile: Json<DriverProfile>,
    pub passenger_profile: Json<PassengerProfile>,
    pub host_profile: Json<HostProfile>,
    pub stats: Json<TravelStats>,
    pub verification_email: bool,
    pub verification_phone: bool,
    pub verification_identity: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub verification_method: Option<String>,
    pub trust_score: i32,
    pub account_status: String,
    pub is_onboarded: bool,
    pub onboarding_step: i32,
    pub failed_login_attempts: i32,
    pub locked_until: Option<DateTime<Utc>>,
    pub blocked_users: Vec<Uuid>,
    pub last_login: Option<DateTime<Utc>>,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserModel {
    /// Check if user is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
