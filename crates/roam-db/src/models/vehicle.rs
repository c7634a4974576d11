//! Vehicle database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the vehicles table
#[derive(Debug, Clone, FromRow)]
pub struct VehicleModel {
    pub id: Uuid,
    pub owner_id: Uuid,
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
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
