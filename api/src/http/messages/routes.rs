use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::{
    messages::handlers::{__path_list_messages, __path_send_message, list_messages, send_message},
    server::AppState,
};

pub fn message_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_messages, send_message))
}
