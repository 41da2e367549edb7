use axum::extract::State;
use vibecord_core::domain::server::{
    entities::{CreateServerRequest, Server},
    ports::ServerService,
};

use crate::http::server::{ApiError, AppState, Response, extractors::ValidJson};

#[utoipa::path(
    post,
    path = "/api/servers",
    tag = "servers",
    request_body = CreateServerRequest,
    responses(
        (status = 201, description = "Server created successfully", body = Server),
        (status = 400, description = "Bad request - Invalid server payload"),
        (status = 503, description = "Document store unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_server(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateServerRequest>,
) -> Result<Response<Server>, ApiError> {
    let server = state.service.create_server(request.into_input()).await?;
    Ok(Response::created(server))
}

#[utoipa::path(
    get,
    path = "/api/servers",
    tag = "servers",
    responses(
        (status = 200, description = "List of servers retrieved successfully", body = Vec<Server>),
        (status = 503, description = "Document store unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_servers(State(state): State<AppState>) -> Result<Response<Vec<Server>>, ApiError> {
    let servers = state.service.list_servers().await?;
    Ok(Response::ok(servers))
}
