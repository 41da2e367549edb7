pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{VibecordService, create_mongo_store};
pub use domain::common::{CoreError, services::Service};
pub use domain::document::{
    ports::DocumentStore,
    serialization::{serialize_document, serialize_documents, serialize_optional_document},
};
pub use infrastructure::document::{
    DocumentStoreBackend, memory::InMemoryDocumentStore, mongo::MongoDocumentStore,
};
