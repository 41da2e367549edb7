use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::{
    server::AppState,
    servers::handlers::{__path_create_server, __path_list_servers, create_server, list_servers},
};

pub fn server_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_servers, create_server))
}
