pub mod app;
pub mod config;
pub mod http;
pub use app::{App, app_router};
pub use config::Config;
pub use http::health::routes::health_routes;
pub use http::server::{ApiError, AppState};
