//! Profile service
//!
//! The privacy filter plus profile retrieval and activity aggregation.

use tracing::instrument;

use roam_core::{Id, ProfileVisibility, Role, User};

use crate::dto::{
    BookingResponse, CompleteProfileResponse, FullProfileResponse, PrivateProfileResponse,
    ProfileStatsResponse, ProfileView, RedactedProfileResponse, ReviewResponse, TripResponse,
    VehicleResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many recent items of each activity kind a profile shows
const ACTIVITY_LIMIT: i64 = 10;

/// Map an account to what a given viewer may see of it
///
/// Pure function. The owner gets the full document. A private profile
/// short-circuits to a minimal card for everyone else. Otherwise the
/// individual toggles decide email, phone, and location; fields with no
/// place on [`RedactedProfileResponse`] (wallet, lock state, payment and
/// push material) are unconditionally absent.
#[must_use]
pub fn filter_profile(user: &User, viewer: Option<Id>) -> ProfileView {
    if viewer == Some(user.id) {
        return ProfileView::Full(Box::new(FullProfileResponse::from(user)));
    }

    if user.privacy.profile_visibility == ProfileVisibility::Private {
        return ProfileView::Private(PrivateProfileResponse {
            id: user.id,
            fullname: user.fullname.clone(),
            nickname: user.nickname.clone(),
            profile_pic: user.profile_pic.clone(),
            message: "This profile is private",
        });
    }

    ProfileView::Redacted(Box::new(RedactedProfileResponse {
        id: user.id,
        fullname: user.fullname.clone(),
        nickname: user.nickname.clone(),
        email: user.privacy.show_email.then(|| user.email.clone()),
        phone_number: user.privacy.show_phone.then(|| user.phone_number.clone()),
        date_of_birth: user.date_of_birth,
        gender: user.gender,
        bio: user.bio.clone(),
        profile_pic: user.profile_pic.clone(),
        cover_photo: user.cover_photo.clone(),
        current_location: user
            .privacy
            .show_location
            .then(|| user.current_location.clone())
            .flatten(),
        roles: user.roles.clone(),
        preferences: user.preferences.clone(),
        privacy: user.privacy,
        driver_profile: user.driver_profile.clone(),
        passenger_profile: user.passenger_profile.clone(),
        host_profile: user.host_profile.clone(),
        stats: user.stats.clone(),
        verification: user.verification,
        trust_score: user.trust_score,
        account_status: user.account_status,
        is_onboarded: user.is_onboarded,
        last_active: user.last_active,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }))
}

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn load(&self, user_id: Id) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// The owner's own profile, unfiltered
    #[instrument(skip(self))]
    pub async fn my_profile(&self, user_id: Id) -> ServiceResult<FullProfileResponse> {
        let user = self.load(user_id).await?;
        Ok(FullProfileResponse::from(&user))
    }

    /// A profile as seen by the (possibly anonymous) viewer
    #[instrument(skip(self))]
    pub async fn public_profile(
        &self,
        user_id: Id,
        viewer: Option<Id>,
    ) -> ServiceResult<ProfileView> {
        let user = self.load(user_id).await?;
        Ok(filter_profile(&user, viewer))
    }

    /// A profile together with recent activity and aggregated stats
    ///
    /// A private profile is a hard 403 here (not a minimal card): the
    /// activity lists would leak what the card hides.
    #[instrument(skip(self))]
    pub async fn complete_profile(
        &self,
        user_id: Id,
        viewer: Option<Id>,
    ) -> ServiceResult<CompleteProfileResponse> {
        let user = self.load(user_id).await?;
        let is_own = viewer == Some(user.id);

        if user.privacy.profile_visibility == ProfileVisibility::Private && !is_own {
            return Err(roam_common::AppError::forbidden("This profile is private").into());
        }

        let can_see_trips = is_own || user.privacy.show_trips;

        let trips: Vec<TripResponse> = if can_see_trips {
            self.ctx
                .trip_repo()
                .recent_by_driver(user.id, ACTIVITY_LIMIT)
                .await?
                .into_iter()
                .map(TripResponse::from)
                .collect()
        } else {
            Vec::new()
        };

        let bookings: Vec<BookingResponse> = if is_own {
            self.ctx
                .booking_repo()
                .recent_by_guest(user.id, ACTIVITY_LIMIT)
                .await?
                .into_iter()
                .map(BookingResponse::from)
                .collect()
        } else {
            Vec::new()
        };

        let reviews_received: Vec<ReviewResponse> = self
            .ctx
            .review_repo()
            .visible_received(user.id, ACTIVITY_LIMIT)
            .await?
            .into_iter()
            .map(ReviewResponse::from)
            .collect();

        let reviews_given: Vec<ReviewResponse> = if is_own {
            self.ctx
                .review_repo()
                .given_by(user.id, ACTIVITY_LIMIT)
                .await?
                .into_iter()
                .map(ReviewResponse::from)
                .collect()
        } else {
            Vec::new()
        };

        let vehicles: Vec<VehicleResponse> = if user.has_role(Role::Driver) {
            self.ctx
                .vehicle_repo()
                .active_by_owner(user.id)
                .await?
                .into_iter()
                .map(VehicleResponse::from)
                .collect()
        } else {
            Vec::new()
        };

        let stats = ProfileStatsResponse {
            total_trips_as_driver: user.driver_profile.total_rides,
            completed_trips_as_driver: user.driver_profile.completed_rides,
            total_trips_as_passenger: user.passenger_profile.total_trips,
            completed_trips_as_passenger: user.passenger_profile.completed_trips,
            total_bookings_as_host: user.host_profile.total_bookings,
            reviews_received_count: reviews_received.len(),
            average_rating: user.overall_rating(),
            trust_score: user.trust_score,
        };

        let profile = filter_profile(&user, viewer);

        Ok(CompleteProfileResponse {
            profile,
            trips,
            bookings,
            reviews_received,
            reviews_given,
            vehicles,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> User {
        let mut user = User::new(
            Id::generate(),
            "Ana Lee".to_string(),
            "ana_99".to_string(),
            "ana@x.com".to_string(),
            "+15551234567".to_string(),
        );
        user.current_location = Some(roam_core::GeoLocation {
            longitude: 2.35,
            latitude: 48.85,
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            formatted_address: None,
        });
        user
    }

    #[test]
    fn test_owner_sees_full_document() {
        let user = subject();
        let view = filter_profile(&user, Some(user.id));
        assert!(matches!(view, ProfileView::Full(_)));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["email"], "ana@x.com");
        assert_eq!(json["phoneNumber"], "+15551234567");
        assert!(json.get("wallet").is_some());
    }

    #[test]
    fn test_private_profile_short_circuits() {
        let mut user = subject();
        user.privacy.profile_visibility = ProfileVisibility::Private;

        let view = filter_profile(&user, Some(Id::generate()));
        assert!(view.is_private());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["message"], "This profile is private");
        assert!(json.get("email").is_none());
        assert!(json.get("bio").is_none());
    }

    #[test]
    fn test_private_profile_still_full_for_owner() {
        let mut user = subject();
        user.privacy.profile_visibility = ProfileVisibility::Private;

        let view = filter_profile(&user, Some(user.id));
        assert!(matches!(view, ProfileView::Full(_)));
    }

    #[test]
    fn test_email_hidden_by_default_toggle() {
        let user = subject();

        // Default privacy: showEmail = false, showPhone = false
        let view = filter_profile(&user, Some(Id::generate()));
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("phoneNumber").is_none());

        // Location is shown by default
        assert_eq!(json["currentLocation"]["city"], "Paris");
    }

    #[test]
    fn test_toggles_expose_fields() {
        let mut user = subject();
        user.privacy.show_email = true;
        user.privacy.show_location = false;

        let view = filter_profile(&user, Some(Id::generate()));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["email"], "ana@x.com");
        assert!(json.get("phoneNumber").is_none());
        assert!(json.get("currentLocation").is_none());
    }

    #[test]
    fn test_anonymous_viewer_gets_redacted_view() {
        let user = subject();
        let view = filter_profile(&user, None);
        assert!(matches!(view, ProfileView::Redacted(_)));

        // Sensitive material has no field to leak through
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("wallet").is_none());
        assert!(json.get("blockedUsers").is_none());
        assert!(json.get("lastLogin").is_none());
    }
}
