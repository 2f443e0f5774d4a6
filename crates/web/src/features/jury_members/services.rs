use sqlx::PgPool;
use storage::{
    dto::jury_member::{CreateJuryMemberRequest, UpdateJuryMemberRequest},
    error::Result,
    models::JuryMember,
    repository::jury_member::JuryMemberRepository,
};
use uuid::Uuid;

/// List all jury members
pub async fn list_jury_members(pool: &PgPool) -> Result<Vec<JuryMember>> {
    let repo = JuryMemberRepository::new(pool);
    repo.list().await
}

/// Create a jury member
pub async fn create_jury_member(
    pool: &PgPool,
    request: &CreateJuryMemberRequest,
) -> Result<JuryMember> {
    let repo = JuryMemberRepository::new(pool);
    repo.create(request).await
}

/// Update a jury member
pub async fn update_jury_member(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateJuryMemberRequest,
) -> Result<JuryMember> {
    let repo = JuryMemberRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a jury member
pub async fn delete_jury_member(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = JuryMemberRepository::new(pool);
    repo.delete(id).await
}
