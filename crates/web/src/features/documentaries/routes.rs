use axum::{
    Router, middleware,
    extract::{Request, State},
    routing::{get, post},
};
use storage::{Database, models::Role};

use super::handlers::{create_documentary, list_documentaries};
use crate::middleware::auth::{require_auth, require_role};

pub fn routes(db: Database) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_documentary))
        .route_layer(middleware::from_fn_with_state::<_, _, (State<(Database, Role)>, Request)>(
            (db.clone(), Role::InspectionManager),
            require_role,
        ));

    Router::new()
        .route("/", get(list_documentaries))
        .route_layer(middleware::from_fn_with_state(db, require_auth))
        .merge(protected)
}
