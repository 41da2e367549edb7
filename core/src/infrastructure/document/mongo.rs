use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Bson, Document, doc},
    options::FindOptions,
};

use crate::{
    domain::{
        common::CoreError,
        document::ports::{DocumentStore, FindSpec},
    },
    infrastructure::document::stamp_timestamps,
};

/// MongoDB-backed document store.
///
/// Built without a database it stays usable as a value, but every operation
/// fails with [`CoreError::StoreUnavailable`].
#[derive(Clone)]
pub struct MongoDocumentStore {
    db: Option<Database>,
}

impl MongoDocumentStore {
    pub fn new(db: &Database) -> Self {
        Self {
            db: Some(db.clone()),
        }
    }

    pub fn unconfigured() -> Self {
        Self { db: None }
    }

    /// Parses `uri` and selects `db_name`. The driver connects lazily, so an
    /// unreachable server only surfaces on the first operation.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, CoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| CoreError::StoreUnavailable(e.to_string()))?;
        Ok(Self::new(&client.database(db_name)))
    }

    fn database(&self) -> Result<&Database, CoreError> {
        self.db
            .as_ref()
            .ok_or_else(|| CoreError::StoreUnavailable("no database connection configured".into()))
    }

    fn collection(&self, name: &str) -> Result<Collection<Document>, CoreError> {
        Ok(self.database()?.collection::<Document>(name))
    }

    fn find_options(spec: &FindSpec) -> FindOptions {
        let mut options = FindOptions::default();
        options.sort = spec.sort_ascending_by.as_ref().map(|field| {
            let mut sort = Document::new();
            sort.insert(field.as_str(), 1);
            sort
        });
        options.limit = spec.limit.map(|limit| limit.min(i64::MAX as u64) as i64);
        options
    }
}

impl DocumentStore for MongoDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        mut data: Document,
    ) -> Result<String, CoreError> {
        let coll = self.collection(collection)?;
        stamp_timestamps(&mut data);

        let result = coll
            .insert_one(data)
            .await
            .map_err(|e| CoreError::write(collection, e))?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        tracing::debug!(collection, id = %id, "Document inserted");
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
        let coll = self.collection(collection)?;
        // MongoDB treats a zero limit as "no limit".
        if spec.limit == Some(0) {
            return Ok(Vec::new());
        }

        let cursor = coll
            .find(filter)
            .with_options(Self::find_options(&spec))
            .await
            .map_err(|e| CoreError::read(collection, e))?;

        cursor
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| CoreError::read(collection, e))
    }

    async fn find_document(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, CoreError> {
        self.collection(collection)?
            .find_one(filter)
            .await
            .map_err(|e| CoreError::read(collection, e))
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, CoreError> {
        self.collection(collection)?
            .count_documents(filter)
            .await
            .map_err(|e| CoreError::read(collection, e))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, CoreError> {
        let db = self.database()?;
        db.list_collection_names()
            .await
            .map_err(|e| CoreError::read(db.name(), e))
    }

    fn database_name(&self) -> Option<String> {
        self.db.as_ref().map(|db| db.name().to_string())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        self.database()?
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| CoreError::StoreUnavailable(e.to_string()))
    }
}
