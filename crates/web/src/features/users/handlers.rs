use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::MessageResponse,
    dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all staff accounts", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    ),
    tag = "users"
)]
pub async fn list_users(State(db): State<Database>) -> Result<Json<Vec<UserResponse>>, WebError> {
    let users = services::list_users(db.pool()).await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::create_user(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    request_body = UpdateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Account updated", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::update_user(db.pool(), id, &req).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_user(db.pool(), id).await?;

    Ok(Json(MessageResponse::new("User deleted")).into_response())
}
