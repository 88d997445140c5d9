use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{protected, public};
use crate::middleware::require_admin;
use crate::state::AppState;

/// Assemble the full application router: public surface, gated admin
/// surface, static serving for uploads, and the global layers.
pub fn app(state: AppState) -> Router {
    let uploads_dir = state.config.uploads.dir.clone();
    let uploads_base = state.config.uploads.public_base.clone();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        .merge(admin_routes(state.clone()))
        .nest_service(&uploads_base, ServeDir::new(uploads_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        // Token acquisition
        .route("/api/auth/login", post(public::auth::login))
        // Site content
        .route("/api/projects", get(public::content::projects))
        .route("/api/projects/:id", get(public::content::project))
        .route("/api/skills", get(public::content::skills))
        .route("/api/experience", get(public::content::experiences))
        .route("/api/achievements", get(public::content::achievements))
        .route("/api/about", get(public::content::about))
        .route("/api/contact-info", get(public::content::contact_info))
        // Contact form
        .route("/api/messages", post(public::messages::create))
}

/// Everything here is composed as gate -> handler; a rejected request never
/// reaches the handler body.
fn admin_routes(state: AppState) -> Router<AppState> {
    let max_upload = state.config.uploads.max_bytes;

    Router::new()
        .route("/api/auth/me", get(protected::auth::me))
        .route("/api/projects", post(protected::projects::create))
        .route(
            "/api/projects/:id",
            put(protected::projects::update).delete(protected::projects::delete),
        )
        .route("/api/skills", post(protected::skills::create))
        .route(
            "/api/skills/:id",
            put(protected::skills::update).delete(protected::skills::delete),
        )
        .route("/api/experience", post(protected::experience::create))
        .route(
            "/api/experience/:id",
            put(protected::experience::update).delete(protected::experience::delete),
        )
        .route("/api/achievements", post(protected::achievements::create))
        .route(
            "/api/achievements/:id",
            put(protected::achievements::update).delete(protected::achievements::delete),
        )
        .route("/api/messages", get(protected::messages::list))
        .route("/api/messages/:id/read", put(protected::messages::mark_read))
        .route("/api/messages/:id", delete(protected::messages::delete))
        .route("/api/about", put(protected::profile::put_about))
        .route("/api/contact-info", put(protected::profile::put_contact_info))
        .route(
            "/api/uploads",
            post(protected::uploads::upload)
                .delete(protected::uploads::delete)
                .layer(DefaultBodyLimit::max(max_upload)),
        )
        .route("/api/github/repos", get(protected::github::repos))
        .route_layer(from_fn_with_state(state, require_admin))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Portfolio API",
            "version": version,
            "endpoints": {
                "home": "/ (public)",
                "auth": "/api/auth/login (public), /api/auth/me (protected)",
                "content": "/api/projects, /api/skills, /api/experience, /api/achievements, /api/about, /api/contact-info (GET public, mutations protected)",
                "messages": "/api/messages (POST public, inbox protected)",
                "uploads": "/api/uploads (protected)",
                "github": "/api/github/repos (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "status": "ok", "timestamp": now, "store": "ok" }
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "message": "store unavailable",
                    "data": { "status": "degraded", "timestamp": now }
                })),
            )
        }
    }
}
