//! Response header generation.
//!
//! Provides utilities for building FHIR-standard response headers.

use axum::http::{HeaderMap, HeaderValue, header};
use chrono::{DateTime, Utc};
use hfs_lite_persistence::{Document, types::document_version_id};
use serde_json::Value;

/// Builder for resource response headers.
///
/// Generates the headers that accompany a returned resource:
/// - ETag (weak validator over `meta.versionId`)
/// - Last-Modified (from `meta.lastUpdated`)
/// - Location (for created resources)
#[derive(Debug, Default)]
pub struct ResourceHeaders {
    etag: Option<String>,
    last_modified: Option<String>,
    location: Option<String>,
}

impl ResourceHeaders {
    /// Creates headers from a stamped resource document.
    ///
    /// Missing or unparseable meta fields simply leave the header out.
    pub fn from_document(document: &Document) -> Self {
        let etag = document_version_id(document).map(|v| format!("W/\"{}\"", v));

        let last_modified = document
            .get("meta")
            .and_then(|meta| meta.get("lastUpdated"))
            .and_then(Value::as_str)
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| {
                ts.with_timezone(&Utc)
                    .format("%a, %d %b %Y %H:%M:%S GMT")
                    .to_string()
            });

        Self {
            etag,
            last_modified,
            location: None,
        }
    }

    /// Sets the Location reference.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Converts to an Axum HeaderMap.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        let pairs = [
            (header::ETAG, &self.etag),
            (header::LAST_MODIFIED, &self.last_modified),
            (header::LOCATION, &self.location),
        ];
        for (name, value) in pairs {
            if let Some(value) = value.as_deref().and_then(|v| HeaderValue::from_str(v).ok()) {
                headers.insert(name, value);
            }
        }

        headers
    }
}
