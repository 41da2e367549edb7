use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::{
    diagnostics::handlers::{
        __path_hello, __path_read_root, __path_test_database, hello, read_root, test_database,
    },
    server::AppState,
};

pub fn diagnostic_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(read_root))
        .routes(routes!(hello))
        .routes(routes!(test_database))
}
