use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    store: StoreHealth,
}

#[derive(Serialize)]
pub struct StoreHealth {
    backend: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Pings the configured store. Returns 200 OK when it answers within five
/// seconds, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = &state.deps.store;

    let store_health = match tokio::time::timeout(Duration::from_secs(5), store.ping()).await {
        Ok(Ok(())) => StoreHealth {
            backend: store.backend_name().to_string(),
            status: "ok".to_string(),
            error: None,
        },
        Ok(Err(e)) => StoreHealth {
            backend: store.backend_name().to_string(),
            status: "error".to_string(),
            error: Some(format!("Ping failed: {:#}", e)),
        },
        Err(_) => StoreHealth {
            backend: store.backend_name().to_string(),
            status: "error".to_string(),
            error: Some("Ping timeout (>5s)".to_string()),
        },
    };

    let is_healthy = store_health.status == "ok";
    if !is_healthy {
        tracing::warn!(error = ?store_health.error, "Health check failed");
    }

    let (status_code, overall) = if is_healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall.to_string(),
            store: store_health,
        }),
    )
}
