//! In-memory representation of a single 16×256×16 chunk of a paged voxel world.
//!
//! The chunk core covers block/biome storage, coordinate-to-offset addressing,
//! height-map maintenance, and the modified/unused/deleted lifecycle protocol a
//! chunk uses to coordinate with its paging manager. The manager itself (region
//! grouping, persistence, eviction) lives behind the [`Pager`] seam.

pub mod addressing;
pub mod biome;
pub mod block;
pub mod chunk;
pub mod entity;
pub mod pager;

pub use addressing::{
    CHUNK_AREA, CHUNK_SIZE_XZ, CHUNK_SIZE_Y, CHUNK_VOLUME, block_offset, block_to_chunk,
    chunk_to_block, offset_to_pos,
};
pub use biome::Biome;
pub use block::{Block, BlockId};
pub use chunk::Chunk;
pub use entity::EntityRecord;
pub use pager::{Pager, UnloadError};
