//! FHIR primitive rules used by the endpoint.
//!
//! Covers the logical id grammar, server-side id generation, resource type
//! names, and the `meta` block the server stamps on every write.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use hfs_lite_persistence::Document;
use rand::RngCore;
use regex::Regex;
use serde_json::{Map, Value};

/// The FHIR release this server speaks.
pub const FHIR_VERSION: &str = "4.0.1";

/// Random bytes behind a generated id. Hex encoding doubles the length.
const GENERATED_ID_BYTES: usize = 16;

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").expect("id pattern is a valid regex")
});

static RESOURCE_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z]{0,63}$").expect("resource type pattern is a valid regex")
});

/// Returns true if `id` is a valid FHIR logical id.
///
/// Ids are 1 to 64 characters drawn from ASCII letters, digits, `-` and `.`.
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// Returns true if `name` has the shape of a FHIR resource type name.
pub fn is_valid_resource_type(name: &str) -> bool {
    RESOURCE_TYPE_PATTERN.is_match(name)
}

/// Generates a fresh logical id: 32 lowercase hex characters.
pub fn generate_id() -> String {
    let mut bytes = [0u8; GENERATED_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Formats an instant the way `meta.lastUpdated` is written.
///
/// UTC, second precision, `Z` suffix.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Overwrites `meta.versionId` and `meta.lastUpdated` on `document`.
///
/// Other `meta` fields are kept. A `meta` that is not an object is replaced.
pub fn stamp_meta(document: &mut Document, version: u64, instant: DateTime<Utc>) {
    let meta = document
        .entry("meta")
        .or_insert_with(|| Value::Object(Map::new()));
    if !meta.is_object() {
        *meta = Value::Object(Map::new());
    }

    if let Value::Object(meta) = meta {
        meta.insert("versionId".to_string(), Value::String(version.to_string()));
        meta.insert(
            "lastUpdated".to_string(),
            Value::String(format_instant(instant)),
        );
    }
}
