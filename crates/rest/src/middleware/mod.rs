//! HTTP middleware for the FHIR REST API.
//!
//! - [`outcome`] - OperationOutcome bodies for framework-generated errors and panics
//! - [`request_id`] - Request id header and the per-request tracing span

pub mod outcome;
pub mod request_id;

pub use outcome::{outcome_for_bare_errors, panic_outcome};
pub use request_id::{REQUEST_ID_HEADER, make_request_span};
