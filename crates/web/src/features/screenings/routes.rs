use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::{Database, models::Role};

use super::handlers::{
    create_screening, delete_screening, list_screenings, published_schedule, update_screening,
};
use crate::middleware::auth::require_role;

pub fn routes(db: Database) -> Router<Database> {
    let protected = Router::new()
        .route("/", get(list_screenings))
        .route("/", post(create_screening))
        .route("/:id", put(update_screening))
        .route("/:id", delete(delete_screening))
        .route_layer(middleware::from_fn_with_state(
            (db, Role::ProductionManager),
            require_role,
        ));

    Router::new()
        .route("/published", get(published_schedule))
        .merge(protected)
}
