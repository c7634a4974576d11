//! PostgreSQL implementation of BookingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roam_core::entities::Booking;
use roam_core::traits::{BookingRepository, RepoResult};
use roam_core::Id;

use crate::models::BookingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn recent_by_guest(&self, guest_id: Id, limit: i64) -> RepoResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT b.id, b.guest_id, b.check_in_date, b.check_out_date,
                   b.status, b.total_price, b.created_at,
                   l.id AS listing_id, l.title AS listing_title,
                   l.property_type AS listing_property_type, l.city AS listing_city,
                   l.photo AS listing_photo, l.base_price AS listing_base_price,
                   h.id AS host_id, h.fullname AS host_fullname,
                   h.nickname AS host_nickname, h.profile_pic AS host_profile_pic
            FROM bookings b
            JOIN listings l ON l.id = b.listing_id
            JOIN users h ON h.id = b.host_id
            WHERE b.guest_id = $1
            ORDER BY b.created_at DESC
            LIMIT $2
            ",
        )
        .bind(guest_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBookingRepository>();
    }
}
