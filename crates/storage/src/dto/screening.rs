use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Screening;

/// Request payload for scheduling a screening into a room/time slot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScreeningRequest {
    pub documentary_id: Uuid,

    #[validate(custom(function = "validate_not_past"))]
    pub date: NaiveDate,

    #[serde(deserialize_with = "deserialize_time")]
    #[schema(value_type = String, example = "20:30")]
    pub time: NaiveTime,

    #[validate(length(min = 1, max = 255, message = "Room is required"))]
    pub room: String,

    #[serde(default)]
    pub is_published: bool,
}

/// Only the publication flag is mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScreeningRequest {
    pub is_published: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResponse {
    pub id: Uuid,
    pub documentary_id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub time: NaiveTime,
    pub room: String,
    pub is_published: bool,
    pub created_at: chrono::DateTime<Utc>,
}

impl From<Screening> for ScreeningResponse {
    fn from(screening: Screening) -> Self {
        Self {
            id: screening.screening_id,
            documentary_id: screening.documentary_id,
            date: screening.date,
            time: screening.time,
            room: screening.room,
            is_published: screening.is_published,
            created_at: screening.created_at,
        }
    }
}

/// One published screening as shown on the public schedule.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicScreeningEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub time: NaiveTime,
    pub room: String,
    pub documentary: PublicDocumentaryInfo,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicDocumentaryInfo {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub subject: String,
    pub director: PersonNameInfo,
    pub producer: PersonNameInfo,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonNameInfo {
    pub first_name: String,
    pub last_name: String,
}

/// Public schedule block: every published screening of one festival day,
/// ordered by time.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub screenings: Vec<PublicScreeningEntry>,
}

fn validate_not_past(date: &NaiveDate) -> Result<(), validator::ValidationError> {
    if *date < Utc::now().date_naive() {
        return Err(validator::ValidationError::new("past_date"));
    }

    Ok(())
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).map_err(serde::de::Error::custom)
}

/// Accepts both "20:30" and "20:30:00".
pub fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| format!("Invalid time of day: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn request(date: NaiveDate) -> CreateScreeningRequest {
        CreateScreeningRequest {
            documentary_id: Uuid::nil(),
            date,
            time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            room: "Salle 1".into(),
            is_published: false,
        }
    }

    #[test]
    fn accepts_today_and_future_dates() {
        let today = Utc::now().date_naive();
        assert!(request(today).validate().is_ok());
        assert!(
            request(today.checked_add_days(Days::new(7)).unwrap())
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn rejects_past_dates() {
        let yesterday = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(1))
            .unwrap();
        assert!(request(yesterday).validate().is_err());
    }

    #[test]
    fn rejects_an_empty_room() {
        let mut req = request(Utc::now().date_naive());
        req.room.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn parses_both_time_formats() {
        let expected = NaiveTime::from_hms_opt(20, 30, 0).unwrap();
        assert_eq!(parse_time("20:30").unwrap(), expected);
        assert_eq!(parse_time("20:30:00").unwrap(), expected);
        assert!(parse_time("25:99").is_err());
        assert!(parse_time("evening").is_err());
    }

    #[test]
    fn missing_publication_flag_defaults_to_unpublished() {
        let req: CreateScreeningRequest = serde_json::from_value(serde_json::json!({
            "documentaryId": Uuid::nil(),
            "date": "2031-01-15",
            "time": "18:00",
            "room": "Salle 2"
        }))
        .unwrap();

        assert!(!req.is_published);
    }
}
