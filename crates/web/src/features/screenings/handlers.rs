use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::MessageResponse,
    dto::screening::{
        CreateScreeningRequest, ScheduleDay, ScreeningResponse, UpdateScreeningRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/screenings",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all screenings", body = Vec<ScreeningResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Production manager role required")
    ),
    tag = "screenings"
)]
pub async fn list_screenings(
    State(db): State<Database>,
) -> Result<Json<Vec<ScreeningResponse>>, WebError> {
    let screenings = services::list_screenings(db.pool()).await?;

    let response: Vec<ScreeningResponse> =
        screenings.into_iter().map(ScreeningResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/screenings",
    request_body = CreateScreeningRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Screening scheduled", body = ScreeningResponse),
        (status = 404, description = "Documentary not found"),
        (status = 409, description = "Room already booked at that date and time"),
        (status = 422, description = "Validation error")
    ),
    tag = "screenings"
)]
pub async fn create_screening(
    State(db): State<Database>,
    Json(req): Json<CreateScreeningRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let screening = services::create_screening(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ScreeningResponse::from(screening))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/screenings/{id}",
    params(
        ("id" = Uuid, Path, description = "Screening id")
    ),
    request_body = UpdateScreeningRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Publication flag updated", body = ScreeningResponse),
        (status = 404, description = "Screening not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "screenings"
)]
pub async fn update_screening(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateScreeningRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let screening = services::set_published(db.pool(), id, req.is_published).await?;

    Ok(Json(ScreeningResponse::from(screening)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/screenings/{id}",
    params(
        ("id" = Uuid, Path, description = "Screening id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Screening deleted", body = MessageResponse),
        (status = 404, description = "Screening not found")
    ),
    tag = "screenings"
)]
pub async fn delete_screening(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_screening(db.pool(), id).await?;

    Ok(Json(MessageResponse::new("Screening deleted")).into_response())
}

#[utoipa::path(
    get,
    path = "/api/screenings/published",
    responses(
        (status = 200, description = "Published screenings grouped by festival day", body = Vec<ScheduleDay>)
    ),
    tag = "screenings"
)]
pub async fn published_schedule(
    State(db): State<Database>,
) -> Result<Json<Vec<ScheduleDay>>, WebError> {
    let schedule = services::public_schedule(db.pool()).await?;

    Ok(Json(schedule))
}
