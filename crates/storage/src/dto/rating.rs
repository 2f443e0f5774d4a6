use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Rating;
use crate::services::scoring::decimal_to_f64;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    pub screening_id: Uuid,

    pub jury_member_id: Uuid,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub score: f64,

    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkRatingEntry {
    pub jury_member_id: Uuid,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub score: f64,

    pub comment: Option<String>,
}

/// Bulk submission of one screening's jury scores. Members who already
/// rated the screening are skipped, not overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkRatingRequest {
    pub screening_id: Uuid,

    #[validate(length(min = 1, message = "At least one rating is required"), nested)]
    pub ratings: Vec<BulkRatingEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub id: Uuid,
    pub screening_id: Uuid,
    pub jury_member_id: Uuid,
    pub score: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.rating_id,
            screening_id: rating.screening_id,
            jury_member_id: rating.jury_member_id,
            score: decimal_to_f64(rating.score),
            comment: rating.comment,
            created_at: rating.created_at,
        }
    }
}

/// Aggregate of one screening's jury scores; `average_score` is null
/// while the screening has no ratings.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningScoreSummary {
    pub screening_id: Uuid,
    pub average_score: Option<f64>,
    pub rating_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(score: f64) -> CreateRatingRequest {
        CreateRatingRequest {
            screening_id: Uuid::nil(),
            jury_member_id: Uuid::nil(),
            score,
            comment: None,
        }
    }

    #[test]
    fn score_bounds_are_inclusive() {
        assert!(request(0.0).validate().is_ok());
        assert!(request(100.0).validate().is_ok());
        assert!(request(-1.0).validate().is_err());
        assert!(request(101.0).validate().is_err());
    }

    #[test]
    fn bulk_submission_must_not_be_empty() {
        let req = BulkRatingRequest {
            screening_id: Uuid::nil(),
            ratings: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn bulk_entries_are_validated_individually() {
        let req = BulkRatingRequest {
            screening_id: Uuid::nil(),
            ratings: vec![
                BulkRatingEntry {
                    jury_member_id: Uuid::nil(),
                    score: 85.0,
                    comment: None,
                },
                BulkRatingEntry {
                    jury_member_id: Uuid::nil(),
                    score: 180.0,
                    comment: None,
                },
            ],
        };
        assert!(req.validate().is_err());
    }
}
