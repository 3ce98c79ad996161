//! Pure coordinate addressing for chunk-local block storage.
//!
//! Blocks are stored YZX-major: the packed offset is `x | z<<4 | y<<8`, so X
//! varies fastest, then Z, then Y. The per-column arrays (biomes, height map)
//! use the matching Z-major `z*16 + x` layout.

/// Side length of a chunk along the X and Z axes, in blocks.
pub const CHUNK_SIZE_XZ: usize = 16;

/// Height of a chunk along the Y axis, in blocks.
pub const CHUNK_SIZE_Y: usize = 256;

/// Number of (x, z) columns in a chunk (16×16).
pub const CHUNK_AREA: usize = CHUNK_SIZE_XZ * CHUNK_SIZE_XZ;

/// Total number of blocks in a chunk (16×256×16).
pub const CHUNK_VOLUME: usize = CHUNK_AREA * CHUNK_SIZE_Y;

/// Packs chunk-local coordinates into a flat storage offset.
///
/// Returns `Some(x | z<<4 | y<<8)` when `x` and `z` are in `[0, 16)` and `y`
/// is in `[0, 256)`, and `None` otherwise. This runs on every block access,
/// so the out-of-range case is a plain absent value rather than an error.
#[inline]
pub fn block_offset(x: usize, y: usize, z: usize) -> Option<usize> {
    if x >= CHUNK_SIZE_XZ || y >= CHUNK_SIZE_Y || z >= CHUNK_SIZE_XZ {
        return None;
    }
    Some(x | (z << 4) | (y << 8))
}

/// Unpacks a flat storage offset back into `(x, y, z)` coordinates.
///
/// Exact left inverse of [`block_offset`] for every offset it produces.
#[inline]
pub fn offset_to_pos(offset: usize) -> (usize, usize, usize) {
    let x = offset & 0xF;
    let z = (offset >> 4) & 0xF;
    let y = (offset >> 8) & 0xFF;
    (x, y, z)
}

/// Maps global block coordinates to a chunk position and chunk-local offsets.
///
/// Returns `(cx, cz, lx, lz)` where `(cx, cz)` is the chunk-grid position and
/// `(lx, lz)` are the block's local coordinates within that chunk. Uses
/// euclidean division so negative global coordinates land in the correct
/// chunk.
#[inline]
pub fn block_to_chunk(bx: i32, bz: i32) -> (i32, i32, usize, usize) {
    let size = CHUNK_SIZE_XZ as i32;
    let cx = bx.div_euclid(size);
    let cz = bz.div_euclid(size);
    let lx = bx.rem_euclid(size) as usize;
    let lz = bz.rem_euclid(size) as usize;
    (cx, cz, lx, lz)
}

/// Maps a chunk position and chunk-local offsets back to global block coordinates.
///
/// Inverse of [`block_to_chunk`] for local offsets in `[0, 16)`.
#[inline]
pub fn chunk_to_block(cx: i32, cz: i32, lx: usize, lz: usize) -> (i32, i32) {
    let size = CHUNK_SIZE_XZ as i32;
    (cx * size + lx as i32, cz * size + lz as i32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
