//! Database models with SQLx `FromRow` derives

mod booking;
mod review;
mod trip;
mod user;
mod vehicle;

pub use booking::BookingModel;
pub use review::ReviewModel;
pub use trip::TripModel;
pub use user::UserModel;
pub use vehicle::VehicleModel;
