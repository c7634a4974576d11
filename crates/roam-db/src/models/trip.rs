//! Trip database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the trips table, joined with the assigned vehicle
#[derive(Debug, Clone, FromRow)]
pub struct TripModel {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub price_per_seat: f64,
    pub available_seats: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    // LEFT JOIN vehicles
    pub vehicle_id: Option<Uuid>,
    pub vehicle_brand: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<i32>,
    pub vehicle_category: Option<String>,
    pub vehicle_seats: Option<i32>,
    pub vehicle_comfort: Option<String>,
}
