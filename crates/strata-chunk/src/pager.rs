//! The seam between a chunk and its owning paging manager.

use std::io;

use thiserror::Error;

use crate::chunk::Chunk;

/// Error surfaced by a pager when a chunk is handed back to it.
///
/// [`Chunk::mark_unused`] propagates this verbatim; the chunk core neither
/// wraps nor swallows it.
#[derive(Debug, Error)]
pub enum UnloadError {
    /// Persisting a modified chunk failed in the pager's storage backend.
    #[error("failed to persist chunk ({x}, {z})")]
    Persist {
        /// Chunk-grid X coordinate of the affected chunk.
        x: i32,
        /// Chunk-grid Z coordinate of the affected chunk.
        z: i32,
        /// Underlying storage error.
        #[source]
        source: io::Error,
    },
}

/// A paging manager as seen from the chunk core.
///
/// The manager creates chunks via [`Chunk::new`], tracks which are in use,
/// and receives them back through [`unload`](Pager::unload) when the caller
/// is done. What happens next — persistence, grouping into regions, eviction,
/// compression — is entirely the pager's concern. Implementations read the
/// chunk's dirty and tombstone flags to decide between persisting and
/// discarding.
pub trait Pager {
    /// Takes ownership of a chunk the caller no longer needs.
    ///
    /// May block on persistence work. The chunk is consumed regardless of the
    /// outcome; on error the caller learns that persistence failed but can no
    /// longer touch the chunk.
    fn unload(&mut self, chunk: Chunk) -> Result<(), UnloadError>;
}
