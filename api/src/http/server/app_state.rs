use vibecord_core::{DocumentStoreBackend, Service, VibecordService};

use crate::config::DatabaseConfig;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: VibecordService,
    /// Whether `DATABASE_URL` was provided, reported by the diagnostic route
    pub database_url_set: bool,
    /// Whether `DATABASE_NAME` was provided, reported by the diagnostic route
    pub database_name_set: bool,
}

impl AppState {
    pub fn new(service: VibecordService, database: &DatabaseConfig) -> Self {
        Self {
            service,
            database_url_set: database.url.is_some(),
            database_name_set: database.name.is_some(),
        }
    }
}

impl From<DocumentStoreBackend> for AppState {
    fn from(store: DocumentStoreBackend) -> Self {
        AppState::new(Service::new(store), &DatabaseConfig::default())
    }
}
