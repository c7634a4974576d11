//! Entity to DTO mappers

use roam_core::{Booking, Review, Trip, User, Vehicle, VerificationChannel};

use super::responses::{
    BookingResponse, ChannelFlags, FullProfileResponse, NewAccountResponse, ReviewResponse,
    SessionUserResponse, TripResponse, VehicleResponse, VerifiedAccountResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl NewAccountResponse {
    /// Projection of a freshly created account, echoing the chosen channel
    #[must_use]
    pub fn from_user(user: &User, method: VerificationChannel) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            account_status: user.account_status,
            is_onboarded: user.is_onboarded,
            verification_method: method,
            verification: ChannelFlags {
                email: user.verification.email,
                phone: user.verification.phone,
            },
        }
    }
}

impl From<&User> for VerifiedAccountResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            verified: user.verification.email || user.verification.phone,
            account_status: user.account_status,
        }
    }
}

impl From<&User> for SessionUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            profile_pic: user.profile_pic.clone(),
            bio: user.bio.clone(),
            date_of_birth: user.date_of_birth,
            gender: user.gender,
            account_status: user.account_status,
            is_onboarded: user.is_onboarded,
            roles: user.roles.clone(),
            trust_score: user.trust_score,
            verification: user.verification,
            preferences: user.preferences.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&User> for FullProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            date_of_birth: user.date_of_birth,
            gender: user.gender,
            bio: user.bio.clone(),
            profile_pic: user.profile_pic.clone(),
            cover_photo: user.cover_photo.clone(),
            current_location: user.current_location.clone(),
            roles: user.roles.clone(),
            preferences: user.preferences.clone(),
            privacy: user.privacy,
            wallet: user.wallet.clone(),
            driver_profile: user.driver_profile.clone(),
            passenger_profile: user.passenger_profile.clone(),
            host_profile: user.host_profile.clone(),
            stats: user.stats.clone(),
            verification: user.verification,
            trust_score: user.trust_score,
            account_status: user.account_status,
            is_onboarded: user.is_onboarded,
            onboarding_step: user.onboarding_step,
            blocked_users: user.blocked_users.clone(),
            last_login: user.last_login,
            last_active: user.last_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Activity Mappers
// ============================================================================

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            origin: trip.origin,
            destination: trip.destination,
            departure_date: trip.departure_date,
            departure_time: trip.departure_time,
            price_per_seat: trip.price_per_seat,
            available_seats: trip.available_seats,
            status: trip.status,
            vehicle: trip.vehicle,
        }
    }
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            listing: booking.listing,
            host: booking.host,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            status: booking.status,
            total_price: booking.total_price,
        }
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            author: review.author,
            rating: review.rating,
            comment: review.comment,
            review_type: review.review_type,
            created_at: review.created_at,
        }
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            color: vehicle.color,
            category: vehicle.category,
            seats: vehicle.seats,
            comfort: vehicle.comfort,
            features: vehicle.features,
            photos: vehicle.photos,
            is_verified: vehicle.is_verified,
        }
    }
}
