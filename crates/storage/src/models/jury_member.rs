use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Jury members are independent of user accounts; a member need not have
/// a login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JuryMember {
    pub jury_member_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub expertise: String,
    // "president" or "member"
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
