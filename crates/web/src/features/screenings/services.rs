use sqlx::PgPool;
use storage::{
    dto::screening::{CreateScreeningRequest, ScheduleDay},
    error::Result,
    models::Screening,
    repository::screening::ScreeningRepository,
    services::schedule,
};
use uuid::Uuid;

/// List all screenings in chronological order
pub async fn list_screenings(pool: &PgPool) -> Result<Vec<Screening>> {
    let repo = ScreeningRepository::new(pool);
    repo.list().await
}

/// Schedule a screening; fails on a (date, time, room) collision
pub async fn create_screening(pool: &PgPool, request: &CreateScreeningRequest) -> Result<Screening> {
    let repo = ScreeningRepository::new(pool);
    repo.create(request).await
}

/// Toggle public visibility of a screening
pub async fn set_published(pool: &PgPool, id: Uuid, published: bool) -> Result<Screening> {
    let repo = ScreeningRepository::new(pool);
    repo.set_published(id, published).await
}

/// Delete a screening (its ratings cascade away)
pub async fn delete_screening(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ScreeningRepository::new(pool);
    repo.delete(id).await
}

/// Public schedule of published screenings, grouped by festival day
pub async fn public_schedule(pool: &PgPool) -> Result<Vec<ScheduleDay>> {
    schedule::public_schedule(pool).await
}
