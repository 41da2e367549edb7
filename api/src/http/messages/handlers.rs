use axum::extract::{Path, State};
use vibecord_core::domain::message::{
    entities::{CreateMessageRequest, ListMessagesQuery, Message},
    ports::MessageService,
};

use crate::http::server::{
    ApiError, AppState, Response,
    extractors::{ValidJson, ValidQuery},
};

#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/messages",
    tag = "messages",
    params(
        ("channel_id" = String, Path, description = "Channel ID, a missing channel does not block the send")
    ),
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created successfully", body = Message),
        (status = 400, description = "Bad request - Invalid message payload"),
        (status = 503, description = "Document store unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn send_message(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    ValidJson(request): ValidJson<CreateMessageRequest>,
) -> Result<Response<Message>, ApiError> {
    let message = state
        .service
        .send_message(request.into_input(channel_id))
        .await?;
    Ok(Response::created(message))
}

#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/messages",
    tag = "messages",
    params(
        ("channel_id" = String, Path, description = "Channel ID"),
        ListMessagesQuery
    ),
    responses(
        (status = 200, description = "Messages of the channel, oldest first", body = Vec<Message>),
        (status = 400, description = "Bad request - Invalid limit"),
        (status = 503, description = "Document store unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_messages(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    ValidQuery(query): ValidQuery<ListMessagesQuery>,
) -> Result<Response<Vec<Message>>, ApiError> {
    let messages = state
        .service
        .list_messages(&channel_id, query.limit)
        .await?;
    Ok(Response::ok(messages))
}
