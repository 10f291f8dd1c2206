//! Searchset Bundle building.

use hfs_lite_persistence::Document;
use serde_json::{Value, json};

/// An entry in a searchset Bundle.
#[derive(Debug, Clone)]
pub struct BundleEntry {
    /// Reference to the resource (`{base}/{type}/{id}`).
    pub full_url: String,
    /// The resource itself.
    pub resource: Document,
}

impl BundleEntry {
    /// Creates a search result entry.
    pub fn search_result(resource: Document, full_url: impl Into<String>) -> Self {
        Self {
            full_url: full_url.into(),
            resource,
        }
    }

    /// Converts to FHIR JSON.
    pub fn to_json(self) -> Value {
        json!({
            "fullUrl": self.full_url,
            "resource": Value::Object(self.resource),
        })
    }
}

/// Builder for searchset Bundle resources.
///
/// `total` always equals the number of entries added; there is no paging.
#[derive(Debug, Default)]
pub struct BundleBuilder {
    entries: Vec<BundleEntry>,
}

impl BundleBuilder {
    /// Builds the Bundle resource.
    ///
    /// `entry` is always present, even when empty.
    pub fn build(self) -> Value {
        let total = self.entries.len();
        let entries: Vec<Value> = self.entries.into_iter().map(BundleEntry::to_json).collect();

        json!({
            "resourceType": "Bundle",
            "type": "searchset",
            "total": total,
            "entry": entries,
        })
    }
}

impl FromIterator<BundleEntry> for BundleBuilder {
    fn from_iter<I: IntoIterator<Item = BundleEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
