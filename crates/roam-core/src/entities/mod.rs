//! Domain entities - core business objects

mod booking;
mod review;
mod trip;
mod user;
mod vehicle;

pub use booking::{Booking, BookingStatus, ListingRef, UserRef};
pub use review::{Review, ReviewType};
pub use trip::{Trip, TripStatus, VehicleRef};
pub use user::{
    age_between, AccountStatus, DriverProfile, Gender, GeoLocation, HostProfile, IdentityField,
    IssuedVerification, PassengerProfile, Preferences, PrivacySettings, ProfileVisibility, Role,
    TravelStats, User, VerificationChannel, VerificationState, Wallet, TRUST_WEIGHT_EMAIL,
    TRUST_WEIGHT_IDENTITY, TRUST_WEIGHT_PHONE,
};
pub use vehicle::Vehicle;
