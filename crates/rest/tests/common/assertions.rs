//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response carries the FHIR JSON media type.
pub fn assert_fhir_json(response: &TestResponse) {
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(
        content_type, "application/fhir+json",
        "Expected application/fhir+json, got {}",
        content_type
    );
}

/// Asserts that the response has an ETag header equal to `W/"{version}"`.
pub fn assert_etag(response: &TestResponse, version: &str) {
    let etag = response.header("etag");
    assert_eq!(etag, format!("W/\"{}\"", version));
}

/// Asserts that the response body is a FHIR resource of the expected type.
pub fn assert_resource_type(body: &Value, expected: &str) {
    let actual = body
        .get("resourceType")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert_eq!(
        actual, expected,
        "Expected resourceType {}, got {}",
        expected, actual
    );
}

/// Asserts that `body` is a single-issue error OperationOutcome with `code`.
pub fn assert_outcome(body: &Value, code: &str) {
    assert_resource_type(body, "OperationOutcome");

    let issues = body
        .get("issue")
        .and_then(|v| v.as_array())
        .expect("Expected issues array in OperationOutcome");
    assert_eq!(issues.len(), 1, "Expected exactly one issue: {}", body);

    let issue = &issues[0];
    assert_eq!(issue["severity"], "error");
    assert_eq!(issue["code"], code, "Unexpected issue code in {}", body);
    assert!(
        issue["details"]["text"].is_string(),
        "Expected details.text in {}",
        body
    );
}

/// Returns `meta.versionId` of a resource body.
pub fn version_id(body: &Value) -> &str {
    body["meta"]["versionId"]
        .as_str()
        .expect("Expected meta.versionId")
}
