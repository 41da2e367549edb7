use axum::extract::{Path, State};
use vibecord_core::domain::channel::{
    entities::{Channel, CreateChannelRequest},
    ports::ChannelService,
};

use crate::http::server::{ApiError, AppState, Response, extractors::ValidJson};

#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/channels",
    tag = "channels",
    params(
        ("server_id" = String, Path, description = "Server ID, not checked for existence")
    ),
    request_body = CreateChannelRequest,
    responses(
        (status = 201, description = "Channel created successfully", body = Channel),
        (status = 400, description = "Bad request - Invalid channel payload"),
        (status = 503, description = "Document store unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_channel(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
    ValidJson(request): ValidJson<CreateChannelRequest>,
) -> Result<Response<Channel>, ApiError> {
    let channel = state
        .service
        .create_channel(request.into_input(server_id))
        .await?;
    Ok(Response::created(channel))
}

#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/channels",
    tag = "channels",
    params(
        ("server_id" = String, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Channels of the server", body = Vec<Channel>),
        (status = 503, description = "Document store unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_channels(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
) -> Result<Response<Vec<Channel>>, ApiError> {
    let channels = state.service.list_channels(&server_id).await?;
    Ok(Response::ok(channels))
}
