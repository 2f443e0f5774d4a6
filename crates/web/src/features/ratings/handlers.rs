use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::MessageResponse,
    dto::rating::{
        BulkRatingRequest, CreateRatingRequest, RatingResponse, ScreeningScoreSummary,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/ratings",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all ratings, newest first", body = Vec<RatingResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Jury president role required")
    ),
    tag = "ratings"
)]
pub async fn list_ratings(State(db): State<Database>) -> Result<Json<Vec<RatingResponse>>, WebError> {
    let ratings = services::list_ratings(db.pool()).await?;

    let response: Vec<RatingResponse> = ratings.into_iter().map(RatingResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = CreateRatingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Rating recorded", body = RatingResponse),
        (status = 404, description = "Screening or jury member not found"),
        (status = 422, description = "Validation error or member already rated this screening")
    ),
    tag = "ratings"
)]
pub async fn create_rating(
    State(db): State<Database>,
    Json(req): Json<CreateRatingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let rating = services::create_rating(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(RatingResponse::from(rating))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/ratings/bulk",
    request_body = BulkRatingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Newly created ratings; members who already rated the screening are skipped", body = Vec<RatingResponse>),
        (status = 404, description = "Screening or jury member not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "ratings"
)]
pub async fn create_ratings_bulk(
    State(db): State<Database>,
    Json(req): Json<BulkRatingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let ratings = services::create_ratings_bulk(db.pool(), &req).await?;

    let response: Vec<RatingResponse> = ratings.into_iter().map(RatingResponse::from).collect();

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/ratings/screening/{screening_id}",
    params(
        ("screening_id" = Uuid, Path, description = "Screening id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Ratings for the screening", body = Vec<RatingResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "ratings"
)]
pub async fn list_ratings_for_screening(
    State(db): State<Database>,
    Path(screening_id): Path<Uuid>,
) -> Result<Json<Vec<RatingResponse>>, WebError> {
    let ratings = services::list_ratings_for_screening(db.pool(), screening_id).await?;

    let response: Vec<RatingResponse> = ratings.into_iter().map(RatingResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/ratings/screening/{screening_id}/average",
    params(
        ("screening_id" = Uuid, Path, description = "Screening id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Mean jury score; null while the screening has no ratings", body = ScreeningScoreSummary),
        (status = 404, description = "Screening not found")
    ),
    tag = "ratings"
)]
pub async fn screening_average(
    State(db): State<Database>,
    Path(screening_id): Path<Uuid>,
) -> Result<Json<ScreeningScoreSummary>, WebError> {
    let summary = services::score_summary(db.pool(), screening_id).await?;

    Ok(Json(summary))
}

#[utoipa::path(
    delete,
    path = "/api/ratings/{id}",
    params(
        ("id" = Uuid, Path, description = "Rating id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Rating deleted", body = MessageResponse),
        (status = 404, description = "Rating not found")
    ),
    tag = "ratings"
)]
pub async fn delete_rating(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_rating(db.pool(), id).await?;

    Ok(Json(MessageResponse::new("Rating deleted")).into_response())
}
