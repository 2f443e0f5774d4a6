use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::{Database, models::Role};

use super::handlers::{
    create_rating, create_ratings_bulk, delete_rating, list_ratings, list_ratings_for_screening,
    screening_average,
};
use crate::middleware::auth::require_role;

pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route("/", get(list_ratings))
        .route("/", post(create_rating))
        .route("/bulk", post(create_ratings_bulk))
        .route("/screening/:screening_id", get(list_ratings_for_screening))
        .route("/screening/:screening_id/average", get(screening_average))
        .route("/:id", delete(delete_rating))
        .route_layer(middleware::from_fn_with_state(
            (db, Role::JuryPresident),
            require_role,
        ))
}
