use sqlx::PgPool;
use storage::dto::auth::{LoginRequest, LoginResponse};
use storage::repository::user::UserRepository;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Verify credentials and issue a fresh bearer token. A NULL stored
/// password means the account has never logged in; the first login sets
/// it (accounts are created without one).
pub async fn login(pool: &PgPool, req: &LoginRequest) -> WebResult<LoginResponse> {
    let repo = UserRepository::new(pool);

    let Some(user) = repo.find_by_email(&req.email).await? else {
        tracing::warn!("Rejected login for unknown email");
        return Err(WebError::Unauthorized);
    };

    match &user.password_hash {
        None => {
            let hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
                .map_err(|e| WebError::InternalServerError(e.to_string()))?;
            repo.set_password(user.user_id, &hash).await?;
        }
        Some(hash) => {
            let password_matches = bcrypt::verify(&req.password, hash)
                .map_err(|e| WebError::InternalServerError(e.to_string()))?;

            if !password_matches {
                tracing::warn!("Rejected login with wrong password");
                return Err(WebError::Unauthorized);
            }
        }
    }

    let token = Uuid::new_v4().simple().to_string();
    repo.create_token(user.user_id, &token).await?;

    Ok(LoginResponse {
        user: user.into(),
        token,
        token_type: "Bearer".to_string(),
    })
}

/// Revoke the presented token only; other sessions stay valid.
pub async fn logout(pool: &PgPool, token: &str) -> WebResult<()> {
    let repo = UserRepository::new(pool);
    repo.delete_token(token).await?;

    Ok(())
}
