//! The in-memory chunk store.
//!
//! [`MemoryStore`] owns every chunk that is loaded but not currently checked
//! out, keyed by [`ChunkKey`] in an `FxHashMap`. Callers check a chunk out by
//! value, mutate it, and hand it back through
//! [`Chunk::mark_unused`](strata_chunk::Chunk::mark_unused); the store then
//! persists it (if dirty), discards it (if tombstoned), or simply parks it
//! again.

use rustc_hash::FxHashMap;
use tracing::debug;

use strata_chunk::{Chunk, Pager, UnloadError};

use crate::key::ChunkKey;
use crate::persist::PersistSink;

/// In-memory paging manager with persist-on-unload semantics.
pub struct MemoryStore<S> {
    parked: FxHashMap<ChunkKey, Chunk>,
    sink: S,
}

impl<S: PersistSink> MemoryStore<S> {
    /// Creates an empty store that persists through the given sink.
    pub fn new(sink: S) -> Self {
        Self {
            parked: FxHashMap::default(),
            sink,
        }
    }

    /// Checks out the chunk at `(x, z)`, transferring ownership to the caller.
    ///
    /// Returns the parked chunk if one exists, otherwise a fresh chunk with
    /// factory defaults. The caller returns it via
    /// [`Chunk::mark_unused`](strata_chunk::Chunk::mark_unused).
    pub fn checkout(&mut self, x: i32, z: i32) -> Chunk {
        let key = ChunkKey::new(x, z);
        match self.parked.remove(&key) {
            Some(chunk) => {
                debug!("checking out parked chunk {key}");
                chunk
            }
            None => {
                debug!("creating chunk {key}");
                Chunk::new(x, z)
            }
        }
    }

    /// Number of chunks currently parked in the store.
    pub fn parked_count(&self) -> usize {
        self.parked.len()
    }

    /// Returns `true` if a chunk is parked at the given key.
    pub fn is_parked(&self, key: ChunkKey) -> bool {
        self.parked.contains_key(&key)
    }

    /// Iterates over the keys of all parked chunks.
    pub fn parked_keys(&self) -> impl Iterator<Item = &ChunkKey> {
        self.parked.keys()
    }

    /// Evicts a parked chunk without persisting it, returning it if present.
    pub fn evict(&mut self, key: ChunkKey) -> Option<Chunk> {
        self.parked.remove(&key)
    }
}

impl<S: PersistSink> Pager for MemoryStore<S> {
    /// Takes a chunk back from its caller.
    ///
    /// Tombstoned chunks are dropped without touching the sink. Modified
    /// chunks are persisted first; on sink failure the error surfaces
    /// untouched and the chunk is dropped (it is invalid to its caller either
    /// way). After a successful persist the dirty flag is cleared and the
    /// chunk is parked for the next checkout.
    fn unload(&mut self, mut chunk: Chunk) -> Result<(), UnloadError> {
        let (x, z) = chunk.coordinates();
        let key = ChunkKey::new(x, z);

        if chunk.is_deleted() {
            debug!("discarding tombstoned chunk {key}");
            return Ok(());
        }

        if chunk.is_modified() {
            self.sink
                .persist(&chunk)
                .map_err(|source| UnloadError::Persist { x, z, source })?;
            chunk.clear_modified();
            debug!("persisted chunk {key}");
        }

        self.parked.insert(key, chunk);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
