use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use bson::{Bson, Document, oid::ObjectId};
use tokio::sync::RwLock;

use crate::{
    domain::{
        common::CoreError,
        document::{
            STORE_ID_FIELD,
            ports::{DocumentStore, FindSpec},
        },
    },
    infrastructure::document::stamp_timestamps,
};

const MEMORY_DATABASE_NAME: &str = "memory";

/// Process-local document store keeping each collection in insertion order.
///
/// Assigns ObjectIds and timestamps the same way the MongoDB store does, so
/// services behave identically on top of it.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(field, expected)| doc.get(field) == Some(expected))
}

/// Orders values of the same BSON type. Missing fields sort first, values of
/// unrelated types compare equal.
fn compare_values(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Bson::DateTime(a), Bson::DateTime(b)) => a.timestamp_millis().cmp(&b.timestamp_millis()),
            (Bson::String(a), Bson::String(b)) => a.cmp(b),
            (Bson::Int32(a), Bson::Int32(b)) => a.cmp(b),
            (Bson::Int64(a), Bson::Int64(b)) => a.cmp(b),
            (Bson::Double(a), Bson::Double(b)) => a.total_cmp(b),
            (Bson::Boolean(a), Bson::Boolean(b)) => a.cmp(b),
            (Bson::ObjectId(a), Bson::ObjectId(b)) => a.bytes().cmp(&b.bytes()),
            _ => Ordering::Equal,
        },
    }
}

impl DocumentStore for InMemoryDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        mut data: Document,
    ) -> Result<String, CoreError> {
        let id = match data.get(STORE_ID_FIELD) {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => {
                let oid = ObjectId::new();
                data.insert(STORE_ID_FIELD, oid);
                oid.to_hex()
            }
        };
        stamp_timestamps(&mut data);

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(data);
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, CoreError> {
        self.find_documents(collection, filter, FindSpec::default())
            .await
    }

    async fn find_documents(
        &self,
        collection: &str,
        filter: Document,
        spec: FindSpec,
    ) -> Result<Vec<Document>, CoreError> {
        let collections = self.collections.read().await;
        let mut found: Vec<Document> = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| matches(doc, &filter)).cloned().collect())
            .unwrap_or_default();

        if let Some(field) = &spec.sort_ascending_by {
            // Stable, so ties keep insertion order.
            found.sort_by(|a, b| compare_values(a.get(field), b.get(field)));
        }
        if let Some(limit) = spec.limit {
            found.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(found)
    }

    async fn find_document(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, CoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)).cloned()))
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, CoreError> {
        let collections = self.collections.read().await;
        let count = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| matches(doc, &filter)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, CoreError> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn database_name(&self) -> Option<String> {
        Some(MEMORY_DATABASE_NAME.to_string())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
