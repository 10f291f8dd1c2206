//! OperationOutcome bodies.
//!
//! Every failure this server reports is a single error issue, so the model
//! covers only the fields it emits:
//!
//! ```json
//! {"resourceType":"OperationOutcome","issue":[{"severity":"error","code":"not-found","details":{"text":"..."}}]}
//! ```

use serde::Serialize;

/// `OperationOutcome.issue.severity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// The request failed.
    Error,
}

/// `OperationOutcome.issue.code` values, one per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    /// Rejected input: bad JSON, wrong type, bad or mismatched id.
    Invalid,
    /// Unknown resource or route.
    NotFound,
    /// Create named an id that is already live.
    Duplicate,
    /// Method not allowed on a known route.
    NotSupported,
    /// Request exceeded the configured timeout.
    Timeout,
    /// Store fault or handler panic.
    Exception,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct IssueDetails {
    text: String,
}

/// One entry of `OperationOutcome.issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    severity: IssueSeverity,
    code: IssueType,
    details: IssueDetails,
}

impl Issue {
    /// An issue with severity `error`.
    pub fn error(code: IssueType, text: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            code,
            details: IssueDetails { text: text.into() },
        }
    }
}

/// A serializable OperationOutcome resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    resource_type: &'static str,
    issue: Vec<Issue>,
}

impl OperationOutcome {
    /// An outcome carrying `issues` in order.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            resource_type: "OperationOutcome",
            issue: issues,
        }
    }

    /// The single-issue error outcome used for every failed request.
    pub fn error(code: IssueType, text: impl Into<String>) -> Self {
        Self::new(vec![Issue::error(code, text)])
    }
}
