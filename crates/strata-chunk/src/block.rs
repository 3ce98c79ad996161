//! Block records and the well-known material ID table.
//!
//! The material vocabulary is an open-ended registry owned by external
//! configuration; the constants here are a read-only convenience table of the
//! classic IDs, not an exhaustive enum. The chunk core itself only interprets
//! the three transparent IDs consulted by the height map.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a world material (2 bytes).
///
/// ID 0 is air, so zero-initialized block storage represents empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const DIRT: BlockId = BlockId(3);
    pub const COBBLESTONE: BlockId = BlockId(4);
    pub const PLANKS: BlockId = BlockId(5);
    pub const BEDROCK: BlockId = BlockId(7);
    pub const WATER: BlockId = BlockId(9);
    pub const LAVA: BlockId = BlockId(11);
    pub const SAND: BlockId = BlockId(12);
    pub const GRAVEL: BlockId = BlockId(13);
    pub const LOG: BlockId = BlockId(17);
    pub const LEAVES: BlockId = BlockId(18);
    pub const GLASS: BlockId = BlockId(20);
    pub const SANDSTONE: BlockId = BlockId(24);
    pub const OBSIDIAN: BlockId = BlockId(49);
    pub const GLASS_PANE: BlockId = BlockId(102);

    /// Returns `true` if this material is transparent to the height map
    /// (air, glass, or a glass pane).
    #[inline]
    pub fn is_transparent(self) -> bool {
        matches!(self, BlockId::AIR | BlockId::GLASS | BlockId::GLASS_PANE)
    }
}

/// One voxel cell: a material ID plus auxiliary sub-type/orientation data.
///
/// The auxiliary nibble is opaque payload for the persistence collaborator;
/// the chunk core never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Material identifier.
    pub id: BlockId,
    /// Auxiliary sub-type or orientation data.
    pub data: u8,
}

impl Block {
    /// Creates a block of the given material with zero auxiliary data.
    pub fn new(id: BlockId) -> Self {
        Self { id, data: 0 }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
