use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::MessageResponse,
    dto::jury_member::{CreateJuryMemberRequest, JuryMemberResponse, UpdateJuryMemberRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/jury-members",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all jury members", body = Vec<JuryMemberResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "jury-members"
)]
pub async fn list_jury_members(
    State(db): State<Database>,
) -> Result<Json<Vec<JuryMemberResponse>>, WebError> {
    let members = services::list_jury_members(db.pool()).await?;

    let response: Vec<JuryMemberResponse> =
        members.into_iter().map(JuryMemberResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/jury-members",
    request_body = CreateJuryMemberRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Jury member created", body = JuryMemberResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation error")
    ),
    tag = "jury-members"
)]
pub async fn create_jury_member(
    State(db): State<Database>,
    Json(req): Json<CreateJuryMemberRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let member = services::create_jury_member(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(JuryMemberResponse::from(member))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/jury-members/{id}",
    params(
        ("id" = Uuid, Path, description = "Jury member id")
    ),
    request_body = UpdateJuryMemberRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Jury member updated", body = JuryMemberResponse),
        (status = 404, description = "Jury member not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "jury-members"
)]
pub async fn update_jury_member(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJuryMemberRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let member = services::update_jury_member(db.pool(), id, &req).await?;

    Ok(Json(JuryMemberResponse::from(member)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/jury-members/{id}",
    params(
        ("id" = Uuid, Path, description = "Jury member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Jury member deleted", body = MessageResponse),
        (status = 404, description = "Jury member not found")
    ),
    tag = "jury-members"
)]
pub async fn delete_jury_member(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_jury_member(db.pool(), id).await?;

    Ok(Json(MessageResponse::new("Jury member deleted")).into_response())
}
