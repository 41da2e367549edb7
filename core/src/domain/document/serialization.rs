//! Conversion of stored documents into their transport-safe form.
//!
//! This is the only place the store-native identifier type is turned into a
//! string. Everything leaving the core goes through [`serialize_document`].

use bson::{Bson, Document};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{
    common::CoreError,
    document::{ID_FIELD, STORE_ID_FIELD},
};

/// A document after serialization: plain JSON with `id` as a string.
pub type SerializedDocument = Map<String, Value>;

/// Renders an ObjectId as its hex string. Other values pass through.
pub fn serialize_id(value: Bson) -> Value {
    bson_to_json(value)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or_else(|_| Value::from(dt.timestamp_millis())),
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Renames `_id` to `id` and renders every identifier-typed value as a string.
///
/// Applying it to a document that was already serialized (and converted back
/// to a [`Document`]) leaves it unchanged.
pub fn serialize_document(doc: Document) -> SerializedDocument {
    doc.into_iter()
        .map(|(key, value)| {
            if key == STORE_ID_FIELD {
                (ID_FIELD.to_string(), serialize_id(value))
            } else {
                (key, serialize_id(value))
            }
        })
        .collect()
}

pub fn serialize_optional_document(doc: Option<Document>) -> Option<SerializedDocument> {
    doc.map(serialize_document)
}

pub fn serialize_documents(docs: Vec<Document>) -> Vec<SerializedDocument> {
    docs.into_iter().map(serialize_document).collect()
}

/// Reads a serialized document into its typed view.
pub fn decode_document<T>(doc: SerializedDocument) -> Result<T, CoreError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(Value::Object(doc))
        .map_err(|e| CoreError::SerializationError { msg: e.to_string() })
}

/// Converts a typed insert input into a document for the store.
pub fn encode_document<T>(value: &T) -> Result<Document, CoreError>
where
    T: serde::Serialize,
{
    bson::to_document(value).map_err(|e| CoreError::SerializationError { msg: e.to_string() })
}
