use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use storage::{Database, models::Role, models::User, repository::user::UserRepository};

use crate::error::WebError;

/// Authenticated principal attached to request extensions, together with
/// the token that authenticated it (logout revokes that exact token).
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

/// Admits any authenticated principal.
pub async fn require_auth(
    State(db): State<Database>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let current = authenticate(&db, &req).await?;
    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

/// Admits only principals holding exactly the given role.
pub async fn require_role(
    State((db, role)): State<(Database, Role)>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let current = authenticate(&db, &req).await?;

    if current.user.role != role {
        tracing::warn!(
            required = role.as_str(),
            actual = current.user.role.as_str(),
            "Rejected request with insufficient role"
        );
        return Err(WebError::Forbidden);
    }

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

async fn authenticate(db: &Database, req: &Request) -> Result<CurrentUser, WebError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let Some(token) = bearer_token(header_value) else {
        return Err(WebError::Unauthorized);
    };

    let repo = UserRepository::new(db.pool());
    let user = repo.find_user_by_token(token).await?.ok_or_else(|| {
        tracing::warn!("Rejected unknown access token");
        WebError::Unauthorized
    })?;

    Ok(CurrentUser {
        user,
        token: token.to_string(),
    })
}

fn bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_token_from_a_bearer_header() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("Bearer   abc123  "), Some("abc123"));
    }

    #[test]
    fn rejects_non_bearer_headers() {
        assert_eq!(bearer_token(""), None);
        assert_eq!(bearer_token("Basic abc123"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("abc123"), None);
    }
}
