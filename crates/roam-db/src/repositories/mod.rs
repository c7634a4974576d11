//! Repository implementations backed by PostgreSQL

mod booking;
mod error;
mod review;
mod trip;
mod user;
mod vehicle;

pub use booking::PgBookingRepository;
pub use review::PgReviewRepository;
pub use trip::PgTripRepository;
pub use user::PgUserRepository;
pub use vehicle::PgVehicleRepository;
