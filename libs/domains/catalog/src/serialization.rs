//! Conversion between stored documents and API records.
//!
//! Stored documents carry `_id` and possibly an ObjectId `vendor_id`; API
//! records carry string ids only. [`normalize_document`] bridges the two and
//! is idempotent.

use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use serde::de::DeserializeOwned;

use crate::error::CatalogResult;
use crate::models::EntityId;

const STORE_ID: &str = "_id";
const API_ID: &str = "id";

/// Fields holding references to other entities.
const REFERENCE_FIELDS: [&str; 1] = ["vendor_id"];

/// Rename `_id` to `id` and stringify ObjectId values in id and reference fields.
///
/// Other fields pass through unchanged; already-string ids are left alone.
pub fn normalize_document(document: Document) -> Document {
    let mut normalized = Document::new();
    let mut rest = document;

    if let Some(id) = rest.remove(STORE_ID) {
        normalized.insert(API_ID, id_to_string(id));
    }

    for (key, value) in rest {
        let value = match value {
            Bson::ObjectId(oid) if REFERENCE_FIELDS.contains(&key.as_str()) => {
                Bson::String(oid.to_hex())
            }
            other => other,
        };
        normalized.insert(key, value);
    }

    normalized
}

fn id_to_string(id: Bson) -> Bson {
    match id {
        Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
        Bson::String(s) => Bson::String(s),
        other => Bson::String(other.to_string()),
    }
}

/// Normalize then decode into a typed record.
pub fn decode<T: DeserializeOwned>(document: Document) -> CatalogResult<T> {
    Ok(bson::from_document(normalize_document(document))?)
}

/// Store representation of an id: ObjectId when it parses as one, else string.
pub fn id_to_bson(id: &EntityId) -> Bson {
    match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.as_str().to_string()),
    }
}

/// API representation of a store-assigned id.
pub fn entity_id_from_bson(id: &Bson) -> EntityId {
    match id {
        Bson::ObjectId(oid) => EntityId::new(oid.to_hex()),
        Bson::String(s) => EntityId::new(s.clone()),
        other => EntityId::new(other.to_string()),
    }
}
