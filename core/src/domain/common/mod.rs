use thiserror::Error;

pub mod services;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Document store is unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to read from collection {collection}: {msg}")]
    ReadError { collection: String, msg: String },

    #[error("Failed to write to collection {collection}: {msg}")]
    WriteError { collection: String, msg: String },

    #[error("Document {id} not found in collection {collection}")]
    DocumentNotFound { collection: String, id: String },

    /// A stored document could not be converted to or from its typed view
    #[error("Serialization error: {msg}")]
    SerializationError { msg: String },

    #[error("Health check failed")]
    Unhealthy,
}

impl CoreError {
    pub fn read(collection: &str, err: impl std::fmt::Display) -> Self {
        CoreError::ReadError {
            collection: collection.to_string(),
            msg: err.to_string(),
        }
    }

    pub fn write(collection: &str, err: impl std::fmt::Display) -> Self {
        CoreError::WriteError {
            collection: collection.to_string(),
            msg: err.to_string(),
        }
    }
}
