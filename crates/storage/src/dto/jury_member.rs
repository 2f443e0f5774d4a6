use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::JuryMember;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJuryMemberRequest {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 255, message = "Expertise is required"))]
    pub expertise: String,

    #[validate(custom(function = "validate_jury_role"))]
    pub role: Option<String>,

    #[validate(email(message = "A valid email address is required"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub bio: Option<String>,
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJuryMemberRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub expertise: Option<String>,

    #[validate(custom(function = "validate_jury_role"))]
    pub role: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JuryMemberResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub expertise: String,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<JuryMember> for JuryMemberResponse {
    fn from(member: JuryMember) -> Self {
        Self {
            id: member.jury_member_id,
            first_name: member.first_name,
            last_name: member.last_name,
            expertise: member.expertise,
            role: member.role,
            email: member.email,
            phone: member.phone,
            bio: member.bio,
            created_at: member.created_at,
        }
    }
}

fn validate_jury_role(role: &str) -> Result<(), validator::ValidationError> {
    const VALID_ROLES: &[&str] = &["president", "member"];

    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_jury_role"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: Option<&str>) -> CreateJuryMemberRequest {
        CreateJuryMemberRequest {
            first_name: "Nadia".into(),
            last_name: "Khelifi".into(),
            expertise: "Documentary cinema".into(),
            role: role.map(String::from),
            email: Some("nadia@festival.tn".into()),
            phone: None,
            bio: None,
        }
    }

    #[test]
    fn jury_role_is_restricted_to_the_whitelist() {
        assert!(request(Some("president")).validate().is_ok());
        assert!(request(Some("member")).validate().is_ok());
        assert!(request(None).validate().is_ok());
        assert!(request(Some("chairman")).validate().is_err());
    }
}
