use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::{Database, models::Role};

use super::handlers::{create_user, delete_user, list_users, update_user};
use crate::middleware::auth::require_role;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/:id", put(update_user))
        .route("/:id", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(
            (db, Role::Admin),
            require_role,
        ))
}
