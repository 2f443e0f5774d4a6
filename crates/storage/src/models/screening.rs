use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scheduled public showing of one documentary at a given
/// date/time/room. The (date, time, room) triple is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Screening {
    pub screening_id: Uuid,
    pub documentary_id: Uuid,
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub room: String,
    pub is_published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
