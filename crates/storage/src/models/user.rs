use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Staff roles. Closed enumeration mirrored by the `user_role` Postgres
/// enum so route guards can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    InspectionManager,
    ProductionManager,
    JuryPresident,
    JuryMember,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::InspectionManager => "inspection_manager",
            Role::ProductionManager => "production_manager",
            Role::JuryPresident => "jury_president",
            Role::JuryMember => "jury_member",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    // NULL until the account's first login sets it.
    #[serde(skip)]
    #[schema(ignore)]
    pub password_hash: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// One opaque bearer token per login session.
#[derive(Debug, Clone, FromRow)]
pub struct AuthToken {
    pub token_id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::InspectionManager).unwrap(),
            "\"inspection_manager\""
        );

        let role: Role = serde_json::from_str("\"jury_president\"").unwrap();
        assert_eq!(role, Role::JuryPresident);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }
}
