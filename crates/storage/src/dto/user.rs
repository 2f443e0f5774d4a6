use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Role, User};

/// Request payload for creating a staff account. Accounts are created
/// without a password; the first login sets it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    pub role: Role,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Amel".into(),
            last_name: "Gharbi".into(),
            email: email.into(),
            role: Role::InspectionManager,
        }
    }

    #[test]
    fn accepts_a_well_formed_account() {
        assert!(request("amel@festival.tn").validate().is_ok());
    }

    #[test]
    fn rejects_a_malformed_email() {
        assert!(request("not-an-email").validate().is_err());
    }

    #[test]
    fn response_uses_camel_case_wire_names() {
        let json = serde_json::to_value(UserResponse {
            id: Uuid::nil(),
            first_name: Some("Amel".into()),
            last_name: Some("Gharbi".into()),
            email: "amel@festival.tn".into(),
            role: Role::Admin,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
        .unwrap();

        assert!(json.get("firstName").is_some());
        assert_eq!(json["role"], "admin");
    }
}
