use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::auth::handlers::me,
        features::users::handlers::list_users,
        features::users::handlers::create_user,
        features::users::handlers::update_user,
        features::users::handlers::delete_user,
        features::documentaries::handlers::list_documentaries,
        features::documentaries::handlers::create_documentary,
        features::screenings::handlers::list_screenings,
        features::screenings::handlers::create_screening,
        features::screenings::handlers::update_screening,
        features::screenings::handlers::delete_screening,
        features::screenings::handlers::published_schedule,
        features::jury_members::handlers::list_jury_members,
        features::jury_members::handlers::create_jury_member,
        features::jury_members::handlers::update_jury_member,
        features::jury_members::handlers::delete_jury_member,
        features::ratings::handlers::list_ratings,
        features::ratings::handlers::create_rating,
        features::ratings::handlers::create_ratings_bulk,
        features::ratings::handlers::list_ratings_for_screening,
        features::ratings::handlers::screening_average,
        features::ratings::handlers::delete_rating,
    ),
    components(
        schemas(
            storage::dto::auth::LoginRequest,
            storage::dto::auth::LoginResponse,
            storage::dto::common::MessageResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::UserResponse,
            storage::dto::documentary::CreateDocumentaryRequest,
            storage::dto::documentary::PersonPayload,
            storage::dto::documentary::DocumentaryResponse,
            storage::dto::documentary::PersonResponse,
            storage::dto::screening::CreateScreeningRequest,
            storage::dto::screening::UpdateScreeningRequest,
            storage::dto::screening::ScreeningResponse,
            storage::dto::screening::PublicScreeningEntry,
            storage::dto::screening::PublicDocumentaryInfo,
            storage::dto::screening::PersonNameInfo,
            storage::dto::screening::ScheduleDay,
            storage::dto::jury_member::CreateJuryMemberRequest,
            storage::dto::jury_member::UpdateJuryMemberRequest,
            storage::dto::jury_member::JuryMemberResponse,
            storage::dto::rating::CreateRatingRequest,
            storage::dto::rating::BulkRatingEntry,
            storage::dto::rating::BulkRatingRequest,
            storage::dto::rating::RatingResponse,
            storage::dto::rating::ScreeningScoreSummary,
            storage::models::Role,
        )
    ),
    tags(
        (name = "auth", description = "Login, logout and current-user endpoints"),
        (name = "users", description = "Staff account administration (admin only)"),
        (name = "documentaries", description = "Competition film registry"),
        (name = "screenings", description = "Room/time scheduling and the public schedule"),
        (name = "jury-members", description = "Jury member registry"),
        (name = "ratings", description = "Jury scoring endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Access Token")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting festival API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    features::users::services::ensure_admin(
        db.pool(),
        config.admin_email.as_deref(),
        config.admin_password.as_deref(),
    )
    .await
    .context("Failed to seed admin account")?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", features::auth::routes::routes(db.clone()))
        .nest("/api/users", features::users::routes::routes(db.clone()))
        .nest(
            "/api/documentaries",
            features::documentaries::routes::routes(db.clone()),
        )
        .nest(
            "/api/screenings",
            features::screenings::routes::routes(db.clone()),
        )
        .nest(
            "/api/jury-members",
            features::jury_members::routes::routes(db.clone()),
        )
        .nest("/api/ratings", features::ratings::routes::routes(db.clone()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
