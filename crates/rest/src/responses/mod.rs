//! Response formatting for the FHIR REST API.
//!
//! - [`operation_outcome`] - OperationOutcome generation
//! - [`bundle`] - Searchset Bundle building
//! - [`headers`] - Response header generation (ETag, Last-Modified, Location)
//! - [`format`] - `application/fhir+json` serialization

pub mod bundle;
pub mod format;
pub mod headers;
pub mod operation_outcome;

pub use bundle::{BundleBuilder, BundleEntry};
pub use format::{FHIR_JSON, fhir_json_response};
pub use headers::ResourceHeaders;
pub use operation_outcome::{IssueType, OperationOutcome};
