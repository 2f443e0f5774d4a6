use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Documentary {
    pub documentary_id: Uuid,
    pub code: String,
    pub title: String,
    pub date: chrono::NaiveDate,
    pub subject: String,
    pub director_id: Uuid,
    pub producer_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Owned value-record of a documentary, created in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Director {
    pub director_id: Uuid,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Producer {
    pub producer_id: Uuid,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
