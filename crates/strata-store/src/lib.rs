//! In-memory paging manager for chunk checkout, park, and persist-on-unload.
//!
//! Implements the [`Pager`](strata_chunk::Pager) seam the chunk core is built
//! against. Persistence goes through the pluggable [`PersistSink`] trait; the
//! on-disk region container (sector tables, compression, timestamps) is a
//! separate collaborator behind that trait.

pub mod key;
pub mod memory;
pub mod persist;

pub use key::ChunkKey;
pub use memory::MemoryStore;
pub use persist::PersistSink;
