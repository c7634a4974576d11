//! User entity - the central account model
//!
//! One account spans every side of the platform: rider/driver for trips,
//! guest/host for stays, and the social graph. Verification, lockout, and
//! privacy state all live here; the password hash and one-time secrets are
//! deliberately NOT part of the entity and only exist in the storage layer.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Id;

/// Trust-score weight for a verified email address
pub const TRUST_WEIGHT_EMAIL: i32 = 20;
/// Trust-score weight for a verified phone number
pub const TRUST_WEIGHT_PHONE: i32 = 30;
/// Trust-score weight for a verified identity document
pub const TRUST_WEIGHT_IDENTITY: i32 = 50;

/// Account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Active,
    Suspended,
    Banned,
    Deactivated,
}

impl AccountStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Banned => "banned",
            Self::Deactivated => "deactivated",
        }
    }

    /// Parse from the stored string form
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "suspended" => Some(Self::Suspended),
            "banned" => Some(Self::Banned),
            "deactivated" => Some(Self::Deactivated),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform role an account can act in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Driver,
    Passenger,
    Host,
    Traveler,
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Passenger => "passenger",
            Self::Host => "host",
            Self::Traveler => "traveler",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "driver" => Some(Self::Driver),
            "passenger" => Some(Self::Passenger),
            "host" => Some(Self::Host),
            "traveler" => Some(Self::Traveler),
            _ => None,
        }
    }
}

/// Self-declared gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer-not-to-say",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            "prefer-not-to-say" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }
}

/// Channel through which a one-time verification secret is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationChannel {
    Email,
    Phone,
}

impl VerificationChannel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }
}

/// Identity field checked by the availability endpoint
///
/// An explicit enum instead of a free-form field name: unknown fields are
/// rejected at the boundary and each variant maps to exactly one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityField {
    Nickname,
    Email,
    PhoneNumber,
}

impl IdentityField {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nickname => "nickname",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
        }
    }

    /// Whether lookups on this field compare case-insensitively
    #[must_use]
    pub fn is_lowercased(&self) -> bool {
        matches!(self, Self::Nickname | Self::Email)
    }
}

/// Profile visibility level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    Public,
    Private,
    Friends,
}

/// Per-channel verification flags and the currently open attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerificationState {
    pub email: bool,
    pub phone: bool,
    pub identity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
    /// Channel targeted by the outstanding code, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_method: Option<VerificationChannel>,
}

/// A freshly issued one-time verification secret, handed to the storage layer
#[derive(Debug, Clone)]
pub struct IssuedVerification {
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub method: VerificationChannel,
}

/// Geographic position with optional reverse-geocoded context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
}

/// Ride-sharing preferences shown on the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub smoking: String,
    pub pets: String,
    pub music: bool,
    pub chattiness: String,
    pub languages: Vec<String>,
    pub currency: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            smoking: "no".to_string(),
            pets: "no".to_string(),
            music: true,
            chattiness: "moderate".to_string(),
            languages: Vec::new(),
            currency: "EUR".to_string(),
        }
    }
}

/// Privacy toggles controlling what other users can see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub show_email: bool,
    pub show_phone: bool,
    pub show_location: bool,
    pub show_trips: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: ProfileVisibility::Public,
            show_email: false,
            show_phone: false,
            show_location: true,
            show_trips: true,
        }
    }
}

/// In-platform wallet balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub balance: f64,
    pub currency: String,
    pub pending_balance: f64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            balance: 0.0,
            currency: "EUR".to_string(),
            pending_balance: 0.0,
        }
    }
}

/// Driver-side counters and rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub license_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<NaiveDate>,
    pub total_rides: i32,
    pub completed_rides: i32,
    pub cancelled_rides: i32,
    pub driver_rating: f64,
    pub driver_review_count: i32,
}

/// Passenger-side counters and rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PassengerProfile {
    pub total_trips: i32,
    pub completed_trips: i32,
    pub cancelled_trips: i32,
    pub passenger_rating: f64,
    pub passenger_review_count: i32,
}

/// Host-side counters and rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HostProfile {
    pub total_bookings: i32,
    pub host_rating: f64,
    pub host_review_count: i32,
    pub response_rate: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<i32>,
    pub is_superhost: bool,
}

/// Lifetime travel statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelStats {
    pub total_distance_traveled: f64,
    pub total_distance_driven: f64,
    pub countries_visited: Vec<String>,
    pub cities_visited: Vec<String>,
    pub co2_saved: f64,
}

/// User entity - one account across rides, stays, and the social graph
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Id,
    pub fullname: String,
    /// Stored lowercase, globally unique among live accounts
    pub nickname: String,
    /// Stored lowercase, globally unique among live accounts
    pub email: String,
    /// Globally unique among live accounts
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub bio: String,
    pub profile_pic: String,
    pub cover_photo: String,
    pub current_location: Option<GeoLocation>,
    pub roles: Vec<Role>,
    pub preferences: Preferences,
    pub privacy: PrivacySettings,
    pub wallet: Wallet,
    pub driver_profile: DriverProfile,
    pub passenger_profile: PassengerProfile,
    pub host_profile: HostProfile,
    pub stats: TravelStats,
    pub verification: VerificationState,
    /// Derived from the verification flags, never set directly
    pub trust_score: i32,
    pub account_status: AccountStatus,
    pub is_onboarded: bool,
    pub onboarding_step: i32,
    pub failed_login_attempts: i32,
    pub locked_until: Option<DateTime<Utc>>,
    pub blocked_users: Vec<Id>,
    pub last_login: Option<DateTime<Utc>>,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new pending account with the required identity fields
    ///
    /// Nickname and email are lowercased here so every later comparison can
    /// be exact.
    pub fn new(
        id: Id,
        fullname: String,
        nickname: String,
        email: String,
        phone_number: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            fullname,
            nickname: nickname.to_lowercase(),
            email: email.to_lowercase(),
            phone_number,
            date_of_birth: None,
            gender: None,
            bio: String::new(),
            profile_pic: String::new(),
            cover_photo: String::new(),
            current_location: None,
            roles: Vec::new(),
            preferences: Preferences::default(),
            privacy: PrivacySettings::default(),
            wallet: Wallet::default(),
            driver_profile: DriverProfile::default(),
            passenger_profile: PassengerProfile::default(),
            host_profile: HostProfile::default(),
            stats: TravelStats::default(),
            verification: VerificationState::default(),
            trust_score: 0,
            account_status: AccountStatus::Pending,
            is_onboarded: false,
            onboarding_step: 0,
            failed_login_attempts: 0,
            locked_until: None,
            blocked_users: Vec::new(),
            last_login: None,
            last_active: now,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Whether a failed-login lock is currently in force
    #[must_use]
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| until > now)
    }

    /// Whether the account is soft deleted
    #[inline]
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether both deliverable channels are confirmed
    #[must_use]
    pub fn is_fully_verified(&self) -> bool {
        self.verification.email && self.verification.phone
    }

    /// Recompute the trust score from the verification flags
    ///
    /// The weights sum to 100, so the score stays in [0, 100] by
    /// construction.
    pub fn recompute_trust_score(&mut self) {
        let mut score = 0;
        if self.verification.email {
            score += TRUST_WEIGHT_EMAIL;
        }
        if self.verification.phone {
            score += TRUST_WEIGHT_PHONE;
        }
        if self.verification.identity {
            score += TRUST_WEIGHT_IDENTITY;
        }
        self.trust_score = score;
    }

    /// Apply a successful verification for the given channel
    ///
    /// Sets the channel flag, stamps the verification time, drops the
    /// pending method, recomputes the trust score, and promotes a pending
    /// account to active.
    pub fn complete_verification(&mut self, channel: VerificationChannel, now: DateTime<Utc>) {
        match channel {
            VerificationChannel::Email => self.verification.email = true,
            VerificationChannel::Phone => self.verification.phone = true,
        }
        self.verification.verified_at = Some(now);
        self.verification.pending_method = None;
        self.recompute_trust_score();

        if self.account_status == AccountStatus::Pending {
            self.account_status = AccountStatus::Active;
        }
        self.updated_at = now;
    }

    /// Calendar-aware age on the given date, if a birth date is known
    ///
    /// Year difference, minus one when the month/day of `today` precede the
    /// birthday's month/day.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        let birth = self.date_of_birth?;
        Some(age_between(birth, today))
    }

    /// Whether the account holds the given role
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Mean of the non-zero per-role ratings, 0.0 when unrated everywhere
    #[must_use]
    pub fn overall_rating(&self) -> f64 {
        let ratings: Vec<f64> = [
            self.driver_profile.driver_rating,
            self.passenger_profile.passenger_rating,
            self.host_profile.host_rating,
        ]
        .into_iter()
        .filter(|r| *r > 0.0)
        .collect();

        if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<f64>() / ratings.len() as f64
        }
    }
}

/// Whole years elapsed between two calendar dates
#[must_use]
pub fn age_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
