use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::documentary::{CreateDocumentaryRequest, DocumentaryResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/documentaries",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all documentaries with director and producer", body = Vec<DocumentaryResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "documentaries"
)]
pub async fn list_documentaries(
    State(db): State<Database>,
) -> Result<Json<Vec<DocumentaryResponse>>, WebError> {
    let documentaries = services::list_documentaries(db.pool()).await?;

    Ok(Json(documentaries))
}

#[utoipa::path(
    post,
    path = "/api/documentaries",
    request_body = CreateDocumentaryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Documentary registered", body = DocumentaryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Inspection manager role required"),
        (status = 409, description = "Code already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "documentaries"
)]
pub async fn create_documentary(
    State(db): State<Database>,
    Json(req): Json<CreateDocumentaryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let documentary = services::create_documentary(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(documentary)).into_response())
}
