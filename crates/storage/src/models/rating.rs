use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single jury member's evaluation of a screening, 0 to 100.
/// At most one rating exists per (screening, jury member) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rating {
    pub rating_id: Uuid,
    pub screening_id: Uuid,
    pub jury_member_id: Uuid,
    pub score: Decimal,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
