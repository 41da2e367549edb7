use axum::extract::State;
use vibecord_core::domain::seed::{entities::SeedResult, ports::SeedService};

use crate::http::server::{ApiError, AppState, Response};

#[utoipa::path(
    post,
    path = "/api/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Demo server and its channels", body = SeedResult),
        (status = 503, description = "Document store unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn seed_demo(State(state): State<AppState>) -> Result<Response<SeedResult>, ApiError> {
    let seeded = state.service.seed().await?;
    Ok(Response::ok(seeded))
}
