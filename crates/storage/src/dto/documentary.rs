use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Director, Documentary, Producer};

/// Director or producer payload nested inside a documentary submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Code must be between 1 and 255 characters"
    ))]
    pub code: String,

    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,

    pub birth_date: NaiveDate,
}

/// Request payload for registering a competition film. The director and
/// producer records are owned by the documentary and created with it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentaryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Code must be between 1 and 255 characters"
    ))]
    pub code: String,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub date: NaiveDate,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[validate(nested)]
    pub director: PersonPayload,

    #[validate(nested)]
    pub producer: PersonPayload,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl From<Director> for PersonResponse {
    fn from(director: Director) -> Self {
        Self {
            code: director.code,
            first_name: director.first_name,
            last_name: director.last_name,
            birth_date: director.birth_date,
        }
    }
}

impl From<Producer> for PersonResponse {
    fn from(producer: Producer) -> Self {
        Self {
            code: producer.code,
            first_name: producer.first_name,
            last_name: producer.last_name,
            birth_date: producer.birth_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentaryResponse {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub date: NaiveDate,
    pub subject: String,
    pub director: PersonResponse,
    pub producer: PersonResponse,
}

impl DocumentaryResponse {
    pub fn from_parts(doc: Documentary, director: Director, producer: Producer) -> Self {
        Self {
            id: doc.documentary_id,
            code: doc.code,
            title: doc.title,
            date: doc.date,
            subject: doc.subject,
            director: director.into(),
            producer: producer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(code: &str) -> PersonPayload {
        PersonPayload {
            code: code.into(),
            first_name: "Leila".into(),
            last_name: "Ben Salem".into(),
            birth_date: NaiveDate::from_ymd_opt(1975, 3, 14).unwrap(),
        }
    }

    #[test]
    fn nested_person_payloads_are_validated() {
        let mut req = CreateDocumentaryRequest {
            code: "DOC-2026-001".into(),
            title: "Salt Roads".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            subject: "Saharan trade routes".into(),
            director: person("DIR-001"),
            producer: person("PRO-001"),
        };
        assert!(req.validate().is_ok());

        req.director.first_name.clear();
        assert!(req.validate().is_err());
    }
}
