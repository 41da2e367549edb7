use bson::Document;
use serde::de::DeserializeOwned;

use crate::domain::{
    common::CoreError,
    document::{
        by_id,
        ports::{DocumentStore, FindSpec},
        serialization::{decode_document, serialize_document},
    },
};

#[derive(Clone)]
pub struct Service<D>
where
    D: DocumentStore,
{
    pub(crate) store: D,
}

impl<D> Service<D>
where
    D: DocumentStore,
{
    pub fn new(store: D) -> Self {
        Self { store }
    }

    /// Inserts `data` and reads the stored document back, so the result carries
    /// every default and timestamp the store assigned.
    pub(crate) async fn create_and_fetch<T>(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<T, CoreError>
    where
        T: DeserializeOwned,
    {
        let id = self.store.create_document(collection, data).await?;
        let stored = self
            .store
            .find_document(collection, by_id(&id))
            .await?
            .ok_or_else(|| CoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.clone(),
            })?;
        decode_document(serialize_document(stored))
    }

    pub(crate) async fn fetch_all<T>(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<T>, CoreError>
    where
        T: DeserializeOwned,
    {
        let documents = self.store.get_documents(collection, filter).await?;
        documents
            .into_iter()
            .map(|doc| decode_document(serialize_document(doc)))
            .collect()
    }

    pub(crate) async fn fetch_sorted<T>(
        &self,
        collection: &str,
        filter: Document,
        spec: FindSpec,
    ) -> Result<Vec<T>, CoreError>
    where
        T: DeserializeOwned,
    {
        let documents = self.store.find_documents(collection, filter, spec).await?;
        documents
            .into_iter()
            .map(|doc| decode_document(serialize_document(doc)))
            .collect()
    }

    pub(crate) async fn fetch_first<T>(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<T>, CoreError>
    where
        T: DeserializeOwned,
    {
        self.store
            .find_document(collection, filter)
            .await?
            .map(|doc| decode_document(serialize_document(doc)))
            .transpose()
    }
}
