use sqlx::PgPool;
use storage::{
    dto::user::{CreateUserRequest, UpdateUserRequest},
    error::Result,
    models::User,
    repository::user::UserRepository,
};
use uuid::Uuid;

/// List all staff accounts
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list().await
}

/// Create a staff account (no password until first login)
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(request).await
}

/// Update a staff account
pub async fn update_user(pool: &PgPool, id: Uuid, request: &UpdateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a staff account
pub async fn delete_user(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = UserRepository::new(pool);
    repo.delete(id).await
}

/// First-run bootstrap: create the configured admin account if no user
/// with that email exists yet.
pub async fn ensure_admin(
    pool: &PgPool,
    email: Option<&str>,
    password: Option<&str>,
) -> anyhow::Result<()> {
    let (Some(email), Some(password)) = (email, password) else {
        return Ok(());
    };

    let repo = UserRepository::new(pool);
    if repo.find_by_email(email).await?.is_some() {
        return Ok(());
    }

    tracing::info!("Seeding admin account: {}", email);
    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    repo.create_admin(email, &hash).await?;

    Ok(())
}
