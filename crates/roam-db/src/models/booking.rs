//! Booking database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the bookings table, joined with listing and host summaries
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    // JOIN listings
    pub listing_id: Uuid,
    pub listing_title: String,
    pub listing_property_type: String,
    pub listing_city: Option<String>,
    pub listing_photo: Option<String>,
    pub listing_base_price: f64,
    // JOIN users (host)
    pub host_id: Uuid,
    pub host_fullname: String,
    pub host_nickname: String,
    pub host_profile_pic: String,
}
