//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` and use the camelCase wire
//! casing. Sensitive material (credential hashes, one-time codes, payment
//! references, lock counters) has no field here at all - redaction by type,
//! not by deletion.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use roam_core::{
    AccountStatus, BookingStatus, DriverProfile, Gender, GeoLocation, HostProfile, Id, ListingRef,
    PassengerProfile, Preferences, PrivacySettings, ReviewType, Role, TravelStats, TripStatus,
    UserRef, VehicleRef, VerificationChannel, VerificationState, Wallet,
};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic wrapper for endpoints that return `{ "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Plain acknowledgement with a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Availability probe result
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub message: String,
}

/// Verification flags echoed right after signup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelFlags {
    pub email: bool,
    pub phone: bool,
}

/// Redacted projection of a freshly created account
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountResponse {
    pub id: Id,
    pub fullname: String,
    pub nickname: String,
    pub email: String,
    pub phone_number: String,
    pub account_status: AccountStatus,
    pub is_onboarded: bool,
    pub verification_method: VerificationChannel,
    pub verification: ChannelFlags,
}

/// Signup result: the new account plus its session token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user: NewAccountResponse,
    pub token: String,
}

/// Account snapshot returned by the verification endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedAccountResponse {
    pub id: Id,
    pub email: String,
    pub phone_number: String,
    pub verified: bool,
    pub account_status: AccountStatus,
}

/// Verification outcome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResultResponse {
    pub message: String,
    pub user: VerifiedAccountResponse,
}

/// Broad profile returned on sign-in
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub id: Id,
    pub fullname: String,
    pub nickname: String,
    pub email: String,
    pub phone_number: String,
    pub profile_pic: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub account_status: AccountStatus,
    pub is_onboarded: bool,
    pub roles: Vec<Role>,
    pub trust_score: i32,
    pub verification: VerificationState,
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
}

/// Sign-in result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub message: String,
    pub user: SessionUserResponse,
    pub token: String,
}

// ============================================================================
// Profile Responses
// ============================================================================

/// The owner's own profile, nothing held back
///
/// One-time secrets and payment-provider references are absent because the
/// entity itself never carries them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProfileResponse {
    pub id: Id,
    pub fullname: String,
    pub nickname: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub bio: String,
    pub profile_pic: String,
    pub cover_photo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
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
    pub trust_score: i32,
    pub account_status: AccountStatus,
    pub is_onboarded: bool,
    pub onboarding_step: i32,
    pub blocked_users: Vec<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A profile as seen by somebody else, with privacy toggles applied
///
/// `None` on an optional field means the owner hid it; the field is then
/// omitted from the JSON entirely.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedProfileResponse {
    pub id: Id,
    pub fullname: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub bio: String,
    pub profile_pic: String,
    pub cover_photo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<GeoLocation>,
    pub roles: Vec<Role>,
    pub preferences: Preferences,
    pub privacy: PrivacySettings,
    pub driver_profile: DriverProfile,
    pub passenger_profile: PassengerProfile,
    pub host_profile: HostProfile,
    pub stats: TravelStats,
    pub verification: VerificationState,
    pub trust_score: i32,
    pub account_status: AccountStatus,
    pub is_onboarded: bool,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal card returned for a private profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateProfileResponse {
    pub id: Id,
    pub fullname: String,
    pub nickname: String,
    pub profile_pic: String,
    pub message: &'static str,
}

/// Result of the privacy filter
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileView {
    Full(Box<FullProfileResponse>),
    Redacted(Box<RedactedProfileResponse>),
    Private(PrivateProfileResponse),
}

impl ProfileView {
    /// Whether this is the minimal private card
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

// ============================================================================
// Activity Responses
// ============================================================================

/// Trip summary on a profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Id,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub price_per_seat: f64,
    pub available_seats: i32,
    pub status: TripStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleRef>,
}

/// Booking summary on the owner's profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Id,
    pub listing: ListingRef,
    pub host: UserRef,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_price: f64,
}

/// Review summary on a profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Id,
    pub author: UserRef,
    pub rating: i32,
    pub comment: String,
    pub review_type: ReviewType,
    pub created_at: DateTime<Utc>,
}

/// Vehicle card on a driver profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Id,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub category: String,
    pub seats: i32,
    pub comfort: String,
    pub features: Vec<String>,
    pub photos: Vec<String>,
    pub is_verified: bool,
}

/// Aggregated counters shown with a complete profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsResponse {
    pub total_trips_as_driver: i32,
    pub completed_trips_as_driver: i32,
    pub total_trips_as_passenger: i32,
    pub completed_trips_as_passenger: i32,
    pub total_bookings_as_host: i32,
    pub reviews_received_count: usize,
    pub average_rating: f64,
    pub trust_score: i32,
}

/// Profile with recent activity and aggregated stats
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfileResponse {
    pub profile: ProfileView,
    pub trips: Vec<TripResponse>,
    pub bookings: Vec<BookingResponse>,
    pub reviews_received: Vec<ReviewResponse>,
    pub reviews_given: Vec<ReviewResponse>,
    pub vehicles: Vec<VehicleResponse>,
    pub stats: ProfileStatsResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_view_serializes_minimal_card() {
        let view = ProfileView::Private(PrivateProfileResponse {
            id: Id::generate(),
            fullname: "Ana Lee".to_string(),
            nickname: "ana_99".to_string(),
            profile_pic: String::new(),
            message: "This profile is private",
        });

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["message"], "This profile is private");
        assert!(json.get("email").is_none());
        assert!(json.get("trustScore").is_none());
    }

    #[test]
    fn test_hidden_fields_are_omitted_not_null() {
        let response = RedactedProfileResponse {
            id: Id::generate(),
            fullname: "Ana Lee".to_string(),
            nickname: "ana_99".to_string(),
            email: None,
            phone_number: None,
            date_of_birth: None,
            gender: None,
            bio: String::new(),
            profile_pic: String::new(),
            cover_photo: String::new(),
            current_location: None,
            roles: Vec::new(),
            preferences: Preferences::default(),
            privacy: PrivacySettings::default(),
            driver_profile: DriverProfile::default(),
            passenger_profile: PassengerProfile::default(),
            host_profile: HostProfile::default(),
            stats: TravelStats::default(),
            verification: VerificationState::default(),
            trust_score: 0,
            account_status: AccountStatus::Active,
            is_onboarded: true,
            last_active: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("phoneNumber").is_none());
        // camelCase wire casing
        assert!(json.get("trustScore").is_some());
    }
}
