//! Fixed output envelope around the aggregate list.

use serde::Serialize;
use serde_json::Value;

/// Envelope schema version.
pub const SCHEMA_VERSION: &str = "v1";

/// Envelope kind.
pub const KIND: &str = "List";

/// The output wrapper. Only `items` varies; the shape is constant and
/// every key is present even when `items` is empty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    schema_version: &'static str,
    kind: &'static str,
    items: Vec<Value>,
}

impl Manifest {
    /// Wrap an aggregate list.
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            kind: KIND,
            items,
        }
    }

    /// The wrapped entries.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Whether the manifest carries no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
