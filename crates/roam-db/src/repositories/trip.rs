//! PostgreSQL implementation of TripRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roam_core::entities::Trip;
use roam_core::traits::{RepoResult, TripRepository};
use roam_core::Id;

use crate::models::TripModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TripRepository
#[derive(Clone)]
pub struct PgTripRepository {
    pool: PgPool,
}

impl PgTripRepository {
    /// Create a new PgTripRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PgTripRepository {
    #[instrument(skip(self))]
    async fn recent_by_driver(&self, driver_id: Id, limit: i64) -> RepoResult<Vec<Trip>> {
        let rows = sqlx::query_as::<_, TripModel>(
            r"
            SELECT t.id, t.driver_id, t.origin, t.destination,
                   t.departure_date, t.departure_time, t.price_per_seat,
                   t.available_seats, t.status, t.created_at,
                   v.id AS vehicle_id, v.brand AS vehicle_brand, v.model AS vehicle_model,
                   v.year AS vehicle_year, v.category AS vehicle_category,
                   v.seats AS vehicle_seats, v.comfort AS vehicle_comfort
            FROM trips t
            LEFT JOIN vehicles v ON v.id = t.vehicle_id
            WHERE t.driver_id = $1
              AND t.status IN ('published', 'in-progress', 'completed')
            ORDER BY t.departure_date DESC
            LIMIT $2
            ",
        )
        .bind(driver_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Trip::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTripRepository>();
    }
}
