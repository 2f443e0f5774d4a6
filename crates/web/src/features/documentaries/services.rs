use sqlx::PgPool;
use storage::{
    dto::documentary::{CreateDocumentaryRequest, DocumentaryResponse},
    error::Result,
    repository::documentary::DocumentaryRepository,
};

/// List all documentaries with their director and producer
pub async fn list_documentaries(pool: &PgPool) -> Result<Vec<DocumentaryResponse>> {
    let repo = DocumentaryRepository::new(pool);
    repo.list().await
}

/// Register a competition film with its owned director/producer records
pub async fn create_documentary(
    pool: &PgPool,
    request: &CreateDocumentaryRequest,
) -> Result<DocumentaryResponse> {
    let repo = DocumentaryRepository::new(pool);
    repo.create(request).await
}
