//! The CRUD protocol for the single served resource type.
//!
//! [`ResourceEndpoint`] sits between the HTTP handlers and the
//! [`ResourceStore`]. It validates inbound documents, assigns ids, stamps
//! version metadata and maps store outcomes to [`RestError`]s. It holds no
//! locks of its own; all coordination happens inside the store.
//!
//! Every validation step runs before the first store call, so a rejected
//! request never touches stored state.

use std::sync::Arc;

use chrono::Utc;
use hfs_lite_persistence::types::{document_id, document_resource_type};
use hfs_lite_persistence::{Document, ResourceStore};
use serde_json::Value;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::fhir_types::{generate_id, is_valid_id, stamp_meta};
use crate::responses::bundle::{BundleBuilder, BundleEntry};

/// A successfully created resource.
#[derive(Debug, Clone)]
pub struct Created {
    /// The stored document, including the assigned id and meta.
    pub resource: Document,
    /// Reference to the new resource, `{base}/{type}/{id}`.
    pub location: String,
}

/// Create/read/update/delete/search over one resource type.
pub struct ResourceEndpoint {
    store: Arc<dyn ResourceStore>,
    resource_type: String,
    fhir_base: String,
}

impl ResourceEndpoint {
    /// Creates an endpoint serving `resource_type`, emitting references
    /// under `fhir_base`.
    pub fn new(
        store: Arc<dyn ResourceStore>,
        resource_type: impl Into<String>,
        fhir_base: impl Into<String>,
    ) -> Self {
        Self {
            store,
            resource_type: resource_type.into(),
            fhir_base: fhir_base.into(),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &dyn ResourceStore {
        self.store.as_ref()
    }

    /// Returns the resource type this endpoint serves.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the reference for `id`, e.g. `/fhir/Patient/123`.
    pub fn reference(&self, id: &str) -> String {
        format!("{}/{}/{}", self.fhir_base, self.resource_type, id)
    }

    /// Creates a resource from a request body.
    ///
    /// A caller-supplied `id` is kept when valid; otherwise one is generated.
    /// The stored document always carries `meta.versionId` "1". Naming an id
    /// that is already live is a conflict and leaves the stored resource as is.
    pub async fn create(&self, body: Value) -> RestResult<Created> {
        let mut document = self.decode(body)?;

        let id = match document.get("id") {
            None => generate_id(),
            Some(Value::String(id)) if !id.is_empty() => {
                if !is_valid_id(id) {
                    return Err(RestError::InvalidId { id: id.clone() });
                }
                id.clone()
            }
            Some(_) => {
                return Err(RestError::bad_request(
                    "id must be a non-empty string when provided",
                ));
            }
        };

        document.insert("id".to_string(), Value::String(id.clone()));
        stamp_meta(&mut document, 1, Utc::now());

        if !self.store.insert(&id, &document).await? {
            return Err(RestError::AlreadyExists {
                resource_type: self.resource_type.clone(),
                id,
            });
        }

        debug!(resource_type = %self.resource_type, id = %id, "Resource created");

        Ok(Created {
            location: self.reference(&id),
            resource: document,
        })
    }

    /// Reads the current document for `id`.
    pub async fn read(&self, id: &str) -> RestResult<Document> {
        self.check_id(id)?;

        self.store
            .get(id)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    /// Replaces the document for `id` and advances its version.
    ///
    /// The body `id`, if present, must equal `id` exactly; it is never
    /// corrected. An absent body `id` is filled in. Updating an id that does
    /// not exist creates it.
    pub async fn update(&self, id: &str, body: Value) -> RestResult<Document> {
        self.check_id(id)?;
        let mut document = self.decode(body)?;

        match document.get("id") {
            None => {}
            Some(Value::String(body_id)) if body_id == id => {}
            Some(_) => return Err(RestError::bad_request("body.id must match URL id")),
        }
        document
            .entry("id")
            .or_insert_with(|| Value::String(id.to_string()));

        let version = self.store.next_version(id).await?;
        stamp_meta(&mut document, version, Utc::now());

        self.store.put(id, &document).await?;

        debug!(
            resource_type = %self.resource_type,
            id = %id,
            version = version,
            "Resource updated"
        );

        Ok(document)
    }

    /// Deletes the document and version counter for `id`.
    pub async fn delete(&self, id: &str) -> RestResult<()> {
        self.check_id(id)?;

        if !self.store.delete(id).await? {
            return Err(self.not_found(id));
        }

        debug!(resource_type = %self.resource_type, id = %id, "Resource deleted");
        Ok(())
    }

    /// Lists every stored resource as a searchset Bundle.
    pub async fn search(&self) -> RestResult<Value> {
        let documents = self.store.list().await?;

        debug!(
            resource_type = %self.resource_type,
            total = documents.len(),
            "Search complete"
        );

        let bundle: BundleBuilder = documents
            .into_iter()
            .map(|document| {
                let full_url = self.reference(document_id(&document).unwrap_or_default());
                BundleEntry::search_result(document, full_url)
            })
            .collect();

        Ok(bundle.build())
    }

    /// Checks that `body` is an object whose `resourceType` is the served type.
    fn decode(&self, body: Value) -> RestResult<Document> {
        let Value::Object(document) = body else {
            return Err(RestError::bad_request("invalid JSON body"));
        };

        match document_resource_type(&document) {
            Some(resource_type) if resource_type == self.resource_type => Ok(document),
            _ => Err(RestError::bad_request(format!(
                "resourceType must be '{}'",
                self.resource_type
            ))),
        }
    }

    fn check_id(&self, id: &str) -> RestResult<()> {
        if is_valid_id(id) {
            Ok(())
        } else {
            Err(RestError::InvalidId { id: id.to_string() })
        }
    }

    fn not_found(&self, id: &str) -> RestError {
        RestError::NotFound {
            resource_type: self.resource_type.clone(),
            id: id.to_string(),
        }
    }
}
