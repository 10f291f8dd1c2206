//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server construction and seeding
//! - [`assertions`] - HTTP response assertions

// Each integration test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod assertions;
pub mod harness;
