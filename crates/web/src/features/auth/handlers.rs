use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::auth::{LoginRequest, LoginResponse},
    dto::common::MessageResponse,
    dto::user::UserResponse,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, token issued", body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password"),
        (status = 422, description = "Validation error")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let response = services::login(db.pool(), &req).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Token revoked", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    services::logout(db.pool(), &current.token).await?;

    Ok(Json(MessageResponse::new("Logged out")).into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The authenticated user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn me(Extension(current): Extension<CurrentUser>) -> Result<Response, WebError> {
    Ok(Json(UserResponse::from(current.user)).into_response())
}
