use axum::{Json, Router, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use vibecord_core::{DocumentStoreBackend, InMemoryDocumentStore, Service, create_mongo_store};

use crate::{
    config::{Config, StoreKind},
    http::{
        channels::routes::channel_routes,
        diagnostics::routes::diagnostic_routes,
        health::routes::health_routes,
        messages::routes::message_routes,
        seed::routes::seed_routes,
        server::{ApiError, AppState},
        servers::routes::server_routes,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VibeCord API",
        description = "REST backend for servers, channels and messages"
    ),
    tags(
        (name = "diagnostics", description = "Liveness and store diagnostics"),
        (name = "servers", description = "Chat servers"),
        (name = "channels", description = "Channels within a server"),
        (name = "messages", description = "Messages within a channel"),
        (name = "seed", description = "Demo data bootstrap")
    )
)]
pub struct ApiDoc;

/// Builds the full router: API routes, health check, OpenAPI document and
/// viewer, all behind a CORS layer open to every origin.
pub fn app_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(diagnostic_routes())
        .merge(server_routes())
        .merge(channel_routes())
        .merge(message_routes())
        .merge(seed_routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi_json = api.clone();
    router
        .merge(health_routes())
        .merge(Scalar::with_url("/scalar", api))
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = openapi_json.clone();
                async move { Json(doc) }
            }),
        )
        .layer(cors)
        .with_state(state)
}

pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let store: DocumentStoreBackend = match config.database.store {
            StoreKind::Memory => {
                info!("Using in-memory document store");
                InMemoryDocumentStore::new().into()
            }
            StoreKind::Mongo => create_mongo_store(
                config.database.url.as_deref(),
                config.database.name.as_deref(),
            )
            .await
            .into(),
        };
        let state = AppState::new(Service::new(store), &config.database);
        Ok(Self { config, state })
    }

    pub fn router(&self) -> Router {
        app_router(self.state.clone())
    }

    pub async fn start(&self) -> Result<(), ApiError> {
        let addr = self.config.server.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ApiError::StartupError { msg: e.to_string() })?;
        info!(%addr, environment = ?self.config.environment, "Server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::StartupError { msg: e.to_string() })?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => info!("Received SIGTERM, starting shutdown"),
    }
}
