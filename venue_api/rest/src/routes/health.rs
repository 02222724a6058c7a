use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use chrono::SecondsFormat;
use serde::Serialize;
use venue_core_health_contracts::HealthFeatureService;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/health", routing::any(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Json<HealthResponse> {
    let status = service.get_status();

    Json(HealthResponse {
        status: "OK",
        message: "Venue inquiry service is running",
        timestamp: status
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
