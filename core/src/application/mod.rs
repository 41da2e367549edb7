use crate::{
    domain::common::services::Service,
    infrastructure::document::{DocumentStoreBackend, mongo::MongoDocumentStore},
};

/// Concrete service type over whichever store was selected at startup.
pub type VibecordService = Service<DocumentStoreBackend>;

/// Builds the MongoDB store from optional connection settings.
///
/// Missing settings or an unparsable URI leave the store unconfigured: the
/// process still serves requests, and every store-backed route reports the
/// store as unavailable.
pub async fn create_mongo_store(
    database_url: Option<&str>,
    database_name: Option<&str>,
) -> MongoDocumentStore {
    let (Some(url), Some(name)) = (database_url, database_name) else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set, document store left unconfigured");
        return MongoDocumentStore::unconfigured();
    };

    match MongoDocumentStore::connect(url, name).await {
        Ok(store) => {
            tracing::info!(database = name, "MongoDB document store configured");
            store
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to configure MongoDB document store");
            MongoDocumentStore::unconfigured()
        }
    }
}

impl From<DocumentStoreBackend> for VibecordService {
    fn from(store: DocumentStoreBackend) -> Self {
        Service::new(store)
    }
}
