//! HTTP request handlers for FHIR interactions.
//!
//! - [`create`] - Create a new resource
//! - [`read`] - Read a resource by ID
//! - [`update`] - Replace a resource
//! - [`delete`] - Delete a resource
//! - [`search`] - List all resources
//! - [`capabilities`] - Get server capabilities (CapabilityStatement)
//! - [`health`] - Ping, health check and path listing
//! - [`fallback`] - Unmatched routes

pub mod capabilities;
pub mod create;
pub mod delete;
pub mod fallback;
pub mod health;
pub mod read;
pub mod search;
pub mod update;

pub use capabilities::capabilities_handler;
pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::fallback_handler;
pub use health::{health_handler, ping_handler, root_handler};
pub use read::read_handler;
pub use search::search_handler;
pub use update::update_handler;
