//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_project_handler, delete_project_handler, get_project_handler, health_handler,
    join_request_handler, list_backlog_handler, list_projects_handler, og_metadata_handler,
    problem_handler, register_project_handler, submit_idea_handler, update_project_handler,
    vote_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// CORS: any origin when the list is empty, otherwise exactly the listed ones.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Projects
        .route("/api/register-project", post(register_project_handler))
        .route(
            "/api/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route(
            "/api/projects/:id",
            get(get_project_handler)
                .patch(update_project_handler)
                .delete(delete_project_handler),
        )
        .route("/api/og-metadata", get(og_metadata_handler))
        // Backlog
        .route(
            "/api/backlog",
            get(list_backlog_handler).post(submit_idea_handler),
        )
        .route("/api/backlog/:id/vote", post(vote_handler))
        // Submissions
        .route("/api/join-requests", post(join_request_handler))
        .route("/api/problems", post(problem_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
