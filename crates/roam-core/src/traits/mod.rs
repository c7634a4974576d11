//! Repository traits (ports) - define the interface for data access

mod repositories;

pub use repositories::{
    BookingRepository, LoginAttempt, RepoResult, ReviewRepository, TripRepository, UserRepository,
    VehicleRepository,
};
