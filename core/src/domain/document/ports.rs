use bson::Document;

use crate::domain::common::CoreError;

/// Query shape for reads that need ordering or a cap on the result size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindSpec {
    /// Field to sort ascending by. `None` keeps the store's natural order.
    pub sort_ascending_by: Option<String>,
    /// Maximum number of documents returned. `Some(0)` yields nothing.
    pub limit: Option<u64>,
}

impl FindSpec {
    pub fn sorted_by(field: impl Into<String>) -> Self {
        Self {
            sort_ascending_by: Some(field.into()),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Port over a schemaless document database.
///
/// Every operation addresses a named collection. Filters are exact-match
/// mappings of field to value; an empty filter matches every document.
/// Implementations stamp `created_at` and `updated_at` on insert.
pub trait DocumentStore: Send + Sync {
    /// Inserts `data` as a new document and returns its identifier as a string.
    ///
    /// Fails with [`CoreError::StoreUnavailable`] when no connection is
    /// configured, or [`CoreError::WriteError`] when the insert fails.
    fn create_document(
        &self,
        collection: &str,
        data: Document,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Returns every document in `collection` matching `filter`, in the
    /// store's natural order.
    fn get_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> impl Future<Output = Result<Vec<Document>, CoreError>> + Send;

    /// Like [`DocumentStore::get_documents`] with an explicit sort and limit.
    fn find_documents(
        &self,
        collection: &str,
        filter: Document,
        spec: FindSpec,
    ) -> impl Future<Output = Result<Vec<Document>, CoreError>> + Send;

    /// Returns the first document matching `filter`, if any.
    fn find_document(
        &self,
        collection: &str,
        filter: Document,
    ) -> impl Future<Output = Result<Option<Document>, CoreError>> + Send;

    fn count_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn list_collection_names(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    /// Name of the connected database, `None` when no connection is configured.
    fn database_name(&self) -> Option<String>;

    /// Round-trips a no-op command to the store.
    fn ping(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
