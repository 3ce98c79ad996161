//! Per-column biome classification values.

use serde::{Deserialize, Serialize};

/// Biome assigned to one (x, z) column of a chunk.
///
/// `Uncalculated` is the reserved sentinel a freshly created chunk starts
/// with; world generation replaces it once the column has been classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Biome {
    Ocean = 0,
    Plains = 1,
    Desert = 2,
    ExtremeHills = 3,
    Forest = 4,
    Taiga = 5,
    Swampland = 6,
    River = 7,
    Nether = 8,
    End = 9,
    FrozenOcean = 10,
    FrozenRiver = 11,
    IcePlains = 12,
    IceMountains = 13,
    MushroomIsland = 14,
    MushroomIslandShore = 15,
    Beach = 16,
    DesertHills = 17,
    ForestHills = 18,
    TaigaHills = 19,
    ExtremeHillsEdge = 20,
    Jungle = 21,
    JungleHills = 22,
    #[default]
    Uncalculated = 255,
}

impl Biome {
    /// Returns the biome's numeric ID as stored by the persistence layer.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a biome by numeric ID, or `None` for IDs outside the table.
    pub fn from_id(id: u8) -> Option<Biome> {
        let biome = match id {
            0 => Biome::Ocean,
            1 => Biome::Plains,
            2 => Biome::Desert,
            3 => Biome::ExtremeHills,
            4 => Biome::Forest,
            5 => Biome::Taiga,
            6 => Biome::Swampland,
            7 => Biome::River,
            8 => Biome::Nether,
            9 => Biome::End,
            10 => Biome::FrozenOcean,
            11 => Biome::FrozenRiver,
            12 => Biome::IcePlains,
            13 => Biome::IceMountains,
            14 => Biome::MushroomIsland,
            15 => Biome::MushroomIslandShore,
            16 => Biome::Beach,
            17 => Biome::DesertHills,
            18 => Biome::ForestHills,
            19 => Biome::TaigaHills,
            20 => Biome::ExtremeHillsEdge,
            21 => Biome::Jungle,
            22 => Biome::JungleHills,
            255 => Biome::Uncalculated,
            _ => return None,
        };
        Some(biome)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
