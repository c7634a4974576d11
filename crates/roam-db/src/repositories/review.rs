//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roam_core::entities::Review;
use roam_core::traits::{RepoResult, ReviewRepository};
use roam_core::Id;

use crate::models::ReviewModel;

use super::error::map_db_error;

const REVIEW_SELECT: &str = "
    SELECT r.id, r.recipient_id, r.rating, r.comment, r.review_type,
           r.is_visible, r.created_at,
           a.id AS author_id, a.fullname AS author_fullname,
           a.nickname AS author_nickname, a.profile_pic AS author_profile_pic
    FROM reviews r
    JOIN users a ON a.id = r.author_id
";

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn visible_received(&self, recipient_id: Id, limit: i64) -> RepoResult<Vec<Review>> {
        let sql = format!(
            "{REVIEW_SELECT} WHERE r.recipient_id = $1 AND r.is_visible \
             ORDER BY r.created_at DESC LIMIT $2"
        );
        let rows = sqlx::query_as::<_, ReviewModel>(&sql)
            .bind(recipient_id.into_inner())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Review::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn given_by(&self, author_id: Id, limit: i64) -> RepoResult<Vec<Review>> {
        let sql = format!(
            "{REVIEW_SELECT} WHERE r.author_id = $1 \
             ORDER BY r.created_at DESC LIMIT $2"
        );
        let rows = sqlx::query_as::<_, ReviewModel>(&sql)
            .bind(author_id.into_inner())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Review::try_from).collect()
    }
}
