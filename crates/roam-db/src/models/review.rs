//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the reviews table, joined with the author summary
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub review_type: String,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    // JOIN users (author)
    pub author_id: Uuid,
    pub author_fullname: String,
    pub author_nickname: String,
    pub author_profile_pic: String,
}
