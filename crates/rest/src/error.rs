//! Error types for the FHIR REST API.
//!
//! Every failure leaves the server as a FHIR OperationOutcome with a single
//! `error` issue. The status code and issue code are fixed per variant:
//!
//! | Variant | HTTP Status | FHIR Issue Code |
//! |---------|-------------|-----------------|
//! | BadRequest | 400 | invalid |
//! | InvalidId | 400 | invalid |
//! | NotFound | 404 | not-found |
//! | RouteNotFound | 404 | not-found |
//! | AlreadyExists | 409 | duplicate |
//! | MethodNotAllowed | 405 | not-supported |
//! | RequestTimeout | 408 | timeout |
//! | InternalError | 500 | exception |
//!
//! Storage faults from the persistence layer always become `InternalError`.
//! Absence is never a storage error, so it can not leak out as a 500.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hfs_lite_persistence::StorageError;
use tracing::warn;

use crate::responses::format::fhir_json_response;
use crate::responses::operation_outcome::{IssueType, OperationOutcome};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// The request body or its fields failed validation (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// A path or body identifier does not match the FHIR id pattern (HTTP 400).
    InvalidId {
        /// The rejected identifier.
        id: String,
    },

    /// Resource not found (HTTP 404).
    NotFound {
        /// The resource type (e.g., "Patient").
        resource_type: String,
        /// The resource ID.
        id: String,
    },

    /// A create named an id that is already live (HTTP 409).
    AlreadyExists {
        /// The resource type (e.g., "Patient").
        resource_type: String,
        /// The resource ID.
        id: String,
    },

    /// No route matches the request path (HTTP 404).
    RouteNotFound {
        /// The unmatched path.
        path: String,
    },

    /// The route exists but not for this method (HTTP 405).
    MethodNotAllowed {
        /// The method that was attempted.
        method: String,
        /// The request path.
        path: String,
    },

    /// The request did not complete in time (HTTP 408).
    RequestTimeout,

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Shorthand for a [`RestError::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } | RestError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RestError::AlreadyExists { .. } => StatusCode::CONFLICT,
            RestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RestError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the OperationOutcome issue code for this error.
    pub fn issue_type(&self) -> IssueType {
        match self {
            RestError::BadRequest { .. } | RestError::InvalidId { .. } => IssueType::Invalid,
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => IssueType::NotFound,
            RestError::AlreadyExists { .. } => IssueType::Duplicate,
            RestError::MethodNotAllowed { .. } => IssueType::NotSupported,
            RestError::RequestTimeout => IssueType::Timeout,
            RestError::InternalError { .. } => IssueType::Exception,
        }
    }

    /// Returns the human-readable text placed in `issue.details.text`.
    pub fn details(&self) -> String {
        match self {
            RestError::BadRequest { message } => message.clone(),
            RestError::InvalidId { id } => format!("'{}' is not a valid FHIR id", id),
            RestError::NotFound { resource_type, id } => {
                format!("Resource {}/{} not found", resource_type, id)
            }
            RestError::AlreadyExists { resource_type, id } => {
                format!("Resource {}/{} already exists", resource_type, id)
            }
            RestError::RouteNotFound { path } => format!("No route for {}", path),
            RestError::MethodNotAllowed { method, path } => {
                format!("Method {} not allowed on {}", method, path)
            }
            RestError::RequestTimeout => "request timed out".to_string(),
            RestError::InternalError { message } => message.clone(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InvalidId { id } => write!(f, "Invalid id: {}", id),
            RestError::NotFound { resource_type, id } => {
                write!(f, "Resource not found: {}/{}", resource_type, id)
            }
            RestError::AlreadyExists { resource_type, id } => {
                write!(f, "Resource already exists: {}/{}", resource_type, id)
            }
            RestError::RouteNotFound { path } => write!(f, "Route not found: {}", path),
            RestError::MethodNotAllowed { method, path } => {
                write!(f, "Method {} not allowed on {}", method, path)
            }
            RestError::RequestTimeout => write!(f, "Request timed out"),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let outcome = OperationOutcome::error(self.issue_type(), self.details());
        fhir_json_response(self.status_code(), Default::default(), &outcome)
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        warn!(error = %err, "Storage operation failed");
        RestError::InternalError {
            message: "storage error".to_string(),
        }
    }
}

/// Result type for REST handlers.
pub type RestResult<T> = Result<T, RestError>;
