//! Coordinate key for the store's chunk map.

/// Identifies a chunk's position in the world grid, in chunk units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkKey {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkKey {
    /// Creates a new chunk key.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The key of the chunk containing the given global block position.
    pub fn from_block_pos(bx: i32, bz: i32) -> Self {
        let (cx, cz, _, _) = strata_chunk::block_to_chunk(bx, bz);
        Self { x: cx, z: cz }
    }
}

impl std::fmt::Display for ChunkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
