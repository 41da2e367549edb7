use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use vibecord_core::domain::health::ports::HealthService;

use crate::http::server::{AppState, Response};

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Store connectivity report. Every field is a human-readable status string.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(is_set: bool) -> String {
    if is_set {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "diagnostics",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    )
)]
pub async fn read_root() -> Response<MessageResponse> {
    Response::ok(MessageResponse {
        message: "Chat API is running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "diagnostics",
    responses(
        (status = 200, description = "Static greeting", body = MessageResponse)
    )
)]
pub async fn hello() -> Response<MessageResponse> {
    Response::ok(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "diagnostics",
    responses(
        (status = 200, description = "Best-effort store diagnostic, never an error status", body = DiagnosticReport)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Response<DiagnosticReport> {
    let diagnostics = state.service.diagnose().await;

    Response::ok(DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: diagnostics.database,
        database_url: presence(state.database_url_set),
        database_name: presence(state.database_name_set),
        connection_status: diagnostics.connection_status,
        collections: diagnostics.collections,
    })
}
