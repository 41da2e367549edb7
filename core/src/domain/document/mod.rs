use bson::{Document, doc, oid::ObjectId};

pub mod ports;
pub mod serialization;

/// Collection names, one per entity.
pub mod collections {
    pub const SERVER: &str = "server";
    pub const CHANNEL: &str = "channel";
    pub const MESSAGE: &str = "message";
}

/// Field holding the store-native identifier.
pub const STORE_ID_FIELD: &str = "_id";
/// Field the identifier is exposed under once serialized.
pub const ID_FIELD: &str = "id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Builds an exact-match filter on the store identifier. Hex strings that parse
/// as an ObjectId are matched as one, anything else as a plain string.
pub fn by_id(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { STORE_ID_FIELD: oid },
        Err(_) => doc! { STORE_ID_FIELD: id },
    }
}
