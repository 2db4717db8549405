//! Normalized result of an index operation.

use serde::{Deserialize, Serialize};

/// Outcome of indexing a single document.
///
/// `created` is `true` only when the search engine reported the document as
/// newly created. A replaced (updated) document yields `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    /// The document id used for the request.
    pub id: String,
    /// The index name used for the request.
    pub index: String,
    /// The document type name used for the request.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Whether the document was newly created.
    pub created: bool,
}

impl IndexResponse {
    pub fn new(
        id: impl Into<String>,
        index: impl Into<String>,
        doc_type: impl Into<String>,
        created: bool,
    ) -> Self {
        Self {
            id: id.into(),
            index: index.into(),
            doc_type: doc_type.into(),
            created,
        }
    }
}
