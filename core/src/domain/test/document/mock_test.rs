use bson::{Bson, DateTime, Document, doc, oid::ObjectId};
use serde_json::{Value, json};

use crate::domain::document::{
    by_id,
    serialization::{serialize_document, serialize_documents, serialize_optional_document},
};

#[test]
fn test_renames_store_id_to_id() {
    let oid = ObjectId::new();
    let serialized = serialize_document(doc! { "_id": oid, "name": "Test" });

    assert_eq!(serialized.get("id"), Some(&Value::String(oid.to_hex())));
    assert!(serialized.get("_id").is_none());
    assert_eq!(serialized.get("name"), Some(&json!("Test")));
}

#[test]
fn test_renders_other_object_ids_in_place() {
    let owner = ObjectId::new();
    let serialized = serialize_document(doc! {
        "_id": ObjectId::new(),
        "owner_id": owner,
        "member_ids": ["a", "b"],
        "icon_url": Bson::Null,
        "is_private": false,
        "count": 3_i32,
    });

    assert_eq!(serialized.get("owner_id"), Some(&json!(owner.to_hex())));
    assert_eq!(serialized.get("member_ids"), Some(&json!(["a", "b"])));
    assert_eq!(serialized.get("icon_url"), Some(&Value::Null));
    assert_eq!(serialized.get("is_private"), Some(&json!(false)));
    assert_eq!(serialized.get("count"), Some(&json!(3)));
}

#[test]
fn test_renders_datetimes_as_rfc3339() {
    let now = DateTime::now();
    let serialized = serialize_document(doc! { "created_at": now });

    let rendered = serialized
        .get("created_at")
        .and_then(Value::as_str)
        .expect("created_at should be a string");
    let parsed = chrono::DateTime::parse_from_rfc3339(rendered).expect("valid RFC 3339");
    assert_eq!(parsed.timestamp_millis(), now.timestamp_millis());
}

#[test]
fn test_serialization_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let original = doc! {
        "_id": ObjectId::new(),
        "channel_id": "room",
        "attachments": ["a.png"],
        "reactions": {},
        "is_edited": false,
        "created_at": DateTime::now(),
    };

    let once = serialize_document(original);
    let roundtrip: Document = bson::to_document(&once)?;
    let twice = serialize_document(roundtrip);

    assert_eq!(once, twice);

    Ok(())
}

#[test]
fn test_optional_and_sequence_helpers() {
    assert_eq!(serialize_optional_document(None), None);

    let docs = vec![doc! { "_id": ObjectId::new() }, doc! { "_id": "plain" }];
    let serialized = serialize_documents(docs);
    assert_eq!(serialized.len(), 2);
    assert_eq!(serialized[1].get("id"), Some(&json!("plain")));
}

#[test]
fn test_by_id_parses_object_id_hex() {
    let oid = ObjectId::new();
    assert_eq!(by_id(&oid.to_hex()), doc! { "_id": oid });
    assert_eq!(by_id("custom"), doc! { "_id": "custom" });
}
