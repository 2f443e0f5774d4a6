use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::{Database, models::Role};

use super::handlers::{
    create_jury_member, delete_jury_member, list_jury_members, update_jury_member,
};
use crate::middleware::auth::{require_auth, require_role};

pub fn routes(db: Database) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_jury_member))
        .route("/:id", put(update_jury_member))
        .route("/:id", delete(delete_jury_member))
        .route_layer(middleware::from_fn_with_state(
            (db.clone(), Role::Admin),
            require_role,
        ));

    Router::new()
        .route("/", get(list_jury_members))
        .route_layer(middleware::from_fn_with_state(db, require_auth))
        .merge(protected)
}
