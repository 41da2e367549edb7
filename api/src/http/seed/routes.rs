use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::{
    seed::handlers::{__path_seed_demo, seed_demo},
    server::AppState,
};

pub fn seed_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(seed_demo))
}
