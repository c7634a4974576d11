//! Vehicle entity - a car registered by a driver

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Vehicle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: Id,
    pub owner_id: Id,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    /// sedan, suv, hatchback, van, coupe, convertible, other
    pub category: String,
    pub seats: i32,
    /// basic, standard, comfort, luxury
    pub comfort: String,
    pub features: Vec<String>,
    pub photos: Vec<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
