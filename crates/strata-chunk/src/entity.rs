//! Opaque entity records carried by a chunk.

use serde::{Deserialize, Serialize};

/// One structured entity record owned by a chunk.
///
/// The chunk core stores these in order and hands them to the persistence
/// collaborator verbatim; it never inspects the payload. The structured-tree
/// encoding itself belongs to that collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(pub serde_json::Value);

impl EntityRecord {
    /// Wraps an already-built structured value.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }
}
