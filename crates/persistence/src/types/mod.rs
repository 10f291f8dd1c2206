//! Core types for the persistence layer.
//!
//! - [`Document`] - An ordered JSON object holding one resource
//! - [`document_id`], [`document_resource_type`], [`document_version_id`] -
//!   Accessors for the few fields the server interprets

mod document;

pub use document::{Document, document_id, document_resource_type, document_version_id};
