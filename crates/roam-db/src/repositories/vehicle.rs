//! PostgreSQL implementation of VehicleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roam_core::entities::Vehicle;
use roam_core::traits::{RepoResult, VehicleRepository};
use roam_core::Id;

use crate::models::VehicleModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VehicleRepository
#[derive(Clone)]
pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    /// Create a new PgVehicleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    #[instrument(skip(self))]
    async fn active_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleModel>(
            r"
            SELECT id, owner_id, brand, model, year, color, category, seats,
                   comfort, features, photos, is_verified, is_active, created_at
            FROM vehicles
            WHERE owner_id = $1 AND is_active
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }
}
