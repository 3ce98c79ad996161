//! Persistence seam between the store and the serialization collaborator.

use std::io;

use strata_chunk::Chunk;

/// Receives chunks the store has decided to persist.
///
/// The sink sees the chunk's arrays and entity list verbatim, in the fixed
/// storage orderings; how they are encoded and where they land is the sink's
/// concern. A sink is invoked only for chunks whose dirty flag is set and
/// never for tombstoned chunks.
pub trait PersistSink {
    /// Writes one chunk to backing storage.
    fn persist(&mut self, chunk: &Chunk) -> io::Result<()>;
}

/// Sink that drops everything, for stores used as pure caches.
#[derive(Debug, Default)]
pub struct NullSink;

impl PersistSink for NullSink {
    fn persist(&mut self, _chunk: &Chunk) -> io::Result<()> {
        Ok(())
    }
}
