use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use vibecord_core::domain::health::ports::HealthService;

use crate::http::server::AppState;

pub mod routes;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.service.check_health().await {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "message": e.to_string() })),
        ),
    }
}
