//! Resource document type.
//!
//! A resource document is an ordered JSON object. Field order is preserved
//! through the workspace-wide `serde_json/preserve_order` feature, so a document
//! is returned to callers with its fields in the order they were written.
//!
//! Only three fields are interpreted anywhere in the system:
//!
//! - `resourceType` - the type discriminator
//! - `id` - the logical id
//! - `meta.versionId` / `meta.lastUpdated` - version metadata, always
//!   server-assigned

use serde_json::{Map, Value};

/// A FHIR resource document: an ordered mapping from field name to JSON value.
///
/// `Clone` is a structural deep copy and `PartialEq` is deep equality, which is
/// what the store relies on for isolation.
pub type Document = Map<String, Value>;

/// Returns the document's `id` if it is a string.
pub fn document_id(document: &Document) -> Option<&str> {
    document.get("id").and_then(Value::as_str)
}

/// Returns the document's `resourceType` if it is a string.
pub fn document_resource_type(document: &Document) -> Option<&str> {
    document.get("resourceType").and_then(Value::as_str)
}

/// Returns the document's `meta.versionId` if present.
pub fn document_version_id(document: &Document) -> Option<&str> {
    document
        .get("meta")
        .and_then(|meta| meta.get("versionId"))
        .and_then(Value::as_str)
}
