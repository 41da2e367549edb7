use bson::{DateTime, Document};

use crate::domain::{
    common::CoreError,
    document::{
        CREATED_AT_FIELD, UPDATED_AT_FIELD,
        ports::{DocumentStore, FindSpec},
    },
};

pub mod memory;
pub mod mongo;

use memory::InMemoryDocumentStore;
use mongo::MongoDocumentStore;

/// Sets `created_at` and `updated_at` to the current time.
pub(crate) fn stamp_timestamps(data: &mut Document) {
    let now = DateTime::now();
    data.insert(CREATED_AT_FIELD, now);
    data.insert(UPDATED_AT_FIELD, now);
}

/// The store selected at startup.
#[derive(Clone)]
pub enum DocumentStoreBackend {
    Mongo(MongoDocumentStore),
    Memory(InMemoryDocumentStore),
}

impl From<MongoDocumentStore> for DocumentStoreBackend {
    fn from(store: MongoDocumentStore) -> Self {
        DocumentStoreBackend::Mongo(store)
    }
}

impl From<InMemoryDocumentStore> for DocumentStoreBackend {
    fn from(store: InMemoryDocumentStore) -> Self {
        DocumentStoreBackend::Memory(store)
    }
}

impl DocumentStore for DocumentStoreBackend {
    async fn create_document(&self, collection: &str, data: Document) -> Result<String, CoreError> {
        match self {
            Self::Mongo(store) => store.create_document(collection, data).await,
            Self::Memory(store) => store.create_document(collection, data).await,
        }
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, CoreError> {
        match self {
            Self::Mongo(store) => store.get_documents(collection, filter).await,
            Self::Memory(store) => store.get_documents(collection, filter).await,
        }
    }

    async fn find_documents(
        &self,
        collection: &str,
        filter: Document,
        spec: FindSpec,
    ) -> Result<Vec<Document>, CoreError> {
        match self {
            Self::Mongo(store) => store.find_documents(collection, filter, spec).await,
            Self::Memory(store) => store.find_documents(collection, filter, spec).await,
        }
    }

    async fn find_document(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, CoreError> {
        match self {
            Self::Mongo(store) => store.find_document(collection, filter).await,
            Self::Memory(store) => store.find_document(collection, filter).await,
        }
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, CoreError> {
        match self {
            Self::Mongo(store) => store.count_documents(collection, filter).await,
            Self::Memory(store) => store.count_documents(collection, filter).await,
        }
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, CoreError> {
        match self {
            Self::Mongo(store) => store.list_collection_names().await,
            Self::Memory(store) => store.list_collection_names().await,
        }
    }

    fn database_name(&self) -> Option<String> {
        match self {
            Self::Mongo(store) => store.database_name(),
            Self::Memory(store) => store.database_name(),
        }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        match self {
            Self::Mongo(store) => store.ping().await,
            Self::Memory(store) => store.ping().await,
        }
    }
}
