//! Integration test support
//!
//! Spawns the API in-process and drives it over HTTP. Tests are skipped
//! when `DATABASE_URL` is not set.

pub mod fixtures;
pub mod helpers;

pub use helpers::{check_test_env, TestServer};
