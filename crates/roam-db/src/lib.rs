//! # roam-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `roam-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Row ↔ entity mappers
//! - Repository implementations
//!
//! One-time secrets (password hashes, verification and reset codes) never
//! leave this crate: they are matched in `WHERE` clauses and written by
//! dedicated methods, but the mapped entities do not carry them.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};

/// Embedded database migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
pub use repositories::{
    PgBookingRepository, PgReviewRepository, PgTripRepository, PgUserRepository,
    PgVehicleRepository,
};
