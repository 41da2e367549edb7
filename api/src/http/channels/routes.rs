use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::{
    channels::handlers::{
        __path_create_channel, __path_list_channels, create_channel, list_channels,
    },
    server::AppState,
};

pub fn channel_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_channels, create_channel))
}
