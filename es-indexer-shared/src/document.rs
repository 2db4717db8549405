//! Document payload sent to the search engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and modification instants of a document.
///
/// Serialized as a nested object with `created_at` and `modified_at`
/// fields in RFC 3339 format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Timestamp {
    pub fn new(created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            modified_at,
        }
    }
}

/// A document to be indexed.
///
/// The document carries no identity of its own. The index name, type name
/// and document id are supplied when the document is indexed.
///
/// The JSON form is the wire payload posted to the search engine:
///
/// ```json
/// {
///   "title": "...",
///   "body": "...",
///   "timestamp": { "created_at": "...", "modified_at": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub body: String,
    pub timestamp: Timestamp,
}

impl Document {
    /// Create a new document from its title, body and timestamps.
    pub fn new(title: impl Into<String>, body: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            timestamp,
        }
    }
}
