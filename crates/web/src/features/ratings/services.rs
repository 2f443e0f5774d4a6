use sqlx::PgPool;
use storage::{
    dto::rating::{BulkRatingRequest, CreateRatingRequest, ScreeningScoreSummary},
    error::Result,
    models::Rating,
    repository::rating::RatingRepository,
    services::scoring,
};
use uuid::Uuid;

/// List all ratings, newest first
pub async fn list_ratings(pool: &PgPool) -> Result<Vec<Rating>> {
    let repo = RatingRepository::new(pool);
    repo.list().await
}

/// List one screening's ratings
pub async fn list_ratings_for_screening(pool: &PgPool, screening_id: Uuid) -> Result<Vec<Rating>> {
    let repo = RatingRepository::new(pool);
    repo.list_for_screening(screening_id).await
}

/// Record a single jury score; fails if the member already rated the
/// screening
pub async fn create_rating(pool: &PgPool, request: &CreateRatingRequest) -> Result<Rating> {
    let repo = RatingRepository::new(pool);
    repo.create(request).await
}

/// Record a batch of jury scores for one screening, skipping members who
/// already rated it
pub async fn create_ratings_bulk(pool: &PgPool, request: &BulkRatingRequest) -> Result<Vec<Rating>> {
    let repo = RatingRepository::new(pool);
    repo.create_bulk(request).await
}

/// Mean score of one screening's ratings; null while it has none
pub async fn score_summary(pool: &PgPool, screening_id: Uuid) -> Result<ScreeningScoreSummary> {
    scoring::score_summary(pool, screening_id).await
}

/// Delete a rating
pub async fn delete_rating(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = RatingRepository::new(pool);
    repo.delete(id).await
}
