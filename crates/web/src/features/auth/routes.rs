use axum::{
    Router, middleware,
    extract::{Request, State},
    routing::{get, post},
};
use storage::Database;

use super::handlers::{login, logout, me};
use crate::middleware::auth::require_auth;

pub fn routes(db: Database) -> Router<Database> {
    let protected = Router::new()
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state::<_, _, (State<Database>, Request)>(db, require_auth));

    Router::new().route("/login", post(login)).merge(protected)
}
