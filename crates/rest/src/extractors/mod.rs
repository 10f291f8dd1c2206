//! Axum extractors for FHIR-specific data.
//!
//! - [`FhirResource`] - Extract a JSON resource body
//! - [`ResourceId`] - Extract the `{id}` path segment

mod fhir_resource;
mod resource_id;

pub use fhir_resource::{FhirResource, FhirResourceRejection};
pub use resource_id::ResourceId;
