//! The chunk itself: storage arrays, accessors, height-map maintenance, and
//! the lifecycle protocol.
//!
//! A [`Chunk`] owns its block, biome, and height-map storage for its entire
//! lifetime. It holds no pointer back to its paging manager; operations that
//! need manager services take the pager as an explicit argument, and
//! [`mark_unused`](Chunk::mark_unused) consumes the chunk outright, so a
//! retired chunk cannot be touched by construction.

use crate::addressing::{CHUNK_AREA, CHUNK_SIZE_XZ, CHUNK_SIZE_Y, CHUNK_VOLUME, block_offset};
use crate::biome::Biome;
use crate::block::Block;
use crate::entity::EntityRecord;
use crate::pager::{Pager, UnloadError};

/// A 16×256×16 volume of voxel data belonging to a paged world store.
///
/// Single-writer: a chunk carries no internal synchronization and assumes at
/// most one logical owner mutating it at a time.
#[derive(Debug)]
pub struct Chunk {
    x: i32,
    z: i32,
    /// YZX-major, indexed by [`block_offset`]. Always [`CHUNK_VOLUME`] long.
    blocks: Vec<Block>,
    /// Z-major (`z*16 + x`). Always [`CHUNK_AREA`] long.
    biomes: Vec<Biome>,
    /// Z-major, same layout as `biomes`. Always [`CHUNK_AREA`] long.
    height_map: Vec<i32>,
    entities: Vec<EntityRecord>,
    last_update: i64,
    inhabited_time: i64,
    populated: bool,
    modified: bool,
    deleted: bool,
}

impl Chunk {
    /// Creates a chunk at the given chunk-grid coordinates with factory
    /// defaults: every block air, every biome [`Biome::Uncalculated`], every
    /// height-map entry 255, no entities, timers zeroed, flags clear.
    pub fn new(x: i32, z: i32) -> Self {
        Self {
            x,
            z,
            blocks: vec![Block::default(); CHUNK_VOLUME],
            biomes: vec![Biome::Uncalculated; CHUNK_AREA],
            height_map: vec![(CHUNK_SIZE_Y - 1) as i32; CHUNK_AREA],
            entities: Vec::new(),
            last_update: 0,
            inhabited_time: 0,
            populated: false,
            modified: false,
            deleted: false,
        }
    }

    /// Returns the chunk's position in chunk-grid units.
    pub fn coordinates(&self) -> (i32, i32) {
        (self.x, self.z)
    }

    /// Returns the block at `(x, y, z)`, or `None` if any coordinate is out
    /// of range. The out-of-range case is silent: this accessor sits on the
    /// hot path of bulk iteration.
    #[inline]
    pub fn block(&self, x: usize, y: usize, z: usize) -> Option<&Block> {
        block_offset(x, y, z).map(|off| &self.blocks[off])
    }

    /// Mutable variant of [`block`](Chunk::block).
    ///
    /// Mutating a block does not set the dirty flag; callers record their
    /// edits with [`mark_modified`](Chunk::mark_modified) when done.
    #[inline]
    pub fn block_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut Block> {
        block_offset(x, y, z).map(|off| &mut self.blocks[off])
    }

    /// Returns the stored height-map entry for column `(x, z)`: the Y of the
    /// topmost non-transparent block, as of the last recalculation.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `z` is outside `[0, 16)`. Height queries are rare
    /// (column granularity), so strict validation here surfaces caller bugs
    /// immediately instead of letting them propagate.
    pub fn height(&self, x: usize, z: usize) -> i32 {
        assert!(
            x < CHUNK_SIZE_XZ && z < CHUNK_SIZE_XZ,
            "height query out of range: ({x}, {z})"
        );
        self.height_map[z * CHUNK_SIZE_XZ + x]
    }

    /// Visits every block in the chunk exactly once, passing its coordinates
    /// and a mutable reference.
    ///
    /// Visit order is fixed: outer loop over x, then y, then z. Each visit is
    /// an independent addressed access through [`block_offset`], not a linear
    /// scan of the storage order.
    pub fn for_each_block(&mut self, mut f: impl FnMut(usize, usize, usize, &mut Block)) {
        for x in 0..CHUNK_SIZE_XZ {
            for y in 0..CHUNK_SIZE_Y {
                for z in 0..CHUNK_SIZE_XZ {
                    if let Some(off) = block_offset(x, y, z) {
                        f(x, y, z, &mut self.blocks[off]);
                    }
                }
            }
        }
    }

    /// Returns the biome of column `(x, z)`, or `None` if out of range.
    #[inline]
    pub fn biome(&self, x: usize, z: usize) -> Option<Biome> {
        if x >= CHUNK_SIZE_XZ || z >= CHUNK_SIZE_XZ {
            return None;
        }
        Some(self.biomes[z * CHUNK_SIZE_XZ + x])
    }

    /// Sets the biome of column `(x, z)`. Returns `false` (and writes
    /// nothing) if the coordinates are out of range.
    #[inline]
    pub fn set_biome(&mut self, x: usize, z: usize, biome: Biome) -> bool {
        if x >= CHUNK_SIZE_XZ || z >= CHUNK_SIZE_XZ {
            return false;
        }
        self.biomes[z * CHUNK_SIZE_XZ + x] = biome;
        true
    }

    /// The chunk's entity records, in order.
    pub fn entities(&self) -> &[EntityRecord] {
        &self.entities
    }

    /// Mutable access to the entity list, for callers and for the
    /// persistence collaborator.
    pub fn entities_mut(&mut self) -> &mut Vec<EntityRecord> {
        &mut self.entities
    }

    /// Tick of the chunk's last update. Opaque payload for persistence.
    pub fn last_update(&self) -> i64 {
        self.last_update
    }

    /// Sets the last-update tick.
    pub fn set_last_update(&mut self, tick: i64) {
        self.last_update = tick;
    }

    /// Cumulative inhabited time. Opaque payload for persistence.
    pub fn inhabited_time(&self) -> i64 {
        self.inhabited_time
    }

    /// Sets the inhabited-time counter.
    pub fn set_inhabited_time(&mut self, ticks: i64) {
        self.inhabited_time = ticks;
    }

    /// Whether world generation has populated this chunk. Opaque payload.
    pub fn populated(&self) -> bool {
        self.populated
    }

    /// Sets the populated flag.
    pub fn set_populated(&mut self, populated: bool) {
        self.populated = populated;
    }

    /// Marks the chunk dirty. Idempotent; no other effect.
    ///
    /// Call this after mutating blocks, biomes, or entities — mutation itself
    /// never sets the flag.
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Returns the dirty flag.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the dirty flag. Reserved for the paging manager, after a
    /// successful persist.
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Tombstones the chunk. Idempotent; unloading happens separately via
    /// [`mark_unused`](Chunk::mark_unused), at which point a tombstoned chunk
    /// is discarded instead of persisted.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Returns the tombstone flag.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Hands the chunk back to its paging manager.
    ///
    /// Consumes the chunk: whether the pager succeeds or fails, no further
    /// access is possible. The pager's error is propagated verbatim. If block
    /// mutations could have changed any column's topology, call
    /// [`recalc_height_map`](Chunk::recalc_height_map) first; it is not
    /// invoked automatically.
    pub fn mark_unused(self, pager: &mut impl Pager) -> Result<(), UnloadError> {
        pager.unload(self)
    }

    /// Recomputes the height map from current block data.
    ///
    /// For each column, scans from y = 255 downward and records the first
    /// block whose material is not transparent (air, glass, glass pane). A
    /// column containing no such block keeps its previous entry rather than
    /// being reset; callers that need a "no floor" signal must track it
    /// themselves.
    pub fn recalc_height_map(&mut self) {
        let mut column = 0;
        for z in 0..CHUNK_SIZE_XZ {
            for x in 0..CHUNK_SIZE_XZ {
                for y in (0..CHUNK_SIZE_Y).rev() {
                    if let Some(off) = block_offset(x, y, z)
                        && !self.blocks[off].id.is_transparent()
                    {
                        self.height_map[column] = y as i32;
                        break;
                    }
                }
                column += 1;
            }
        }
    }

    /// The full block array in YZX storage order, for the pager's serializer.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The biome array in Z-major order, for the pager's serializer.
    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }

    /// The height-map array in Z-major order, for the pager's serializer.
    pub fn height_map(&self) -> &[i32] {
        &self.height_map
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockId;
    use std::collections::HashSet;
    use std::io;

    /// Mock pager observing what the chunk core hands back on unload.
    #[derive(Default)]
    struct RecordingPager {
        persisted: Vec<(i32, i32)>,
        discarded: Vec<(i32, i32)>,
        fail_persist: bool,
    }

    impl Pager for RecordingPager {
        fn unload(&mut self, chunk: Chunk) -> Result<(), UnloadError> {
            let (x, z) = chunk.coordinates();
            if chunk.is_deleted() {
                self.discarded.push((x, z));
                return Ok(());
            }
            if chunk.is_modified() {
                if self.fail_persist {
                    return Err(UnloadError::Persist {
                        x,
                        z,
                        source: io::Error::other("disk full"),
                    });
                }
                self.persisted.push((x, z));
            }
            Ok(())
        }
    }

    #[test]
    fn test_fresh_chunk_defaults() {
        let chunk = Chunk::new(3, -7);
        assert_eq!(chunk.coordinates(), (3, -7));
        for x in 0..CHUNK_SIZE_XZ {
            for z in 0..CHUNK_SIZE_XZ {
                assert_eq!(chunk.height(x, z), 255);
                assert_eq!(chunk.biome(x, z), Some(Biome::Uncalculated));
            }
        }
        assert_eq!(chunk.block(0, 0, 0), Some(&Block::default()));
        assert_eq!(chunk.block(15, 255, 15), Some(&Block::default()));
        assert!(chunk.entities().is_empty());
        assert!(!chunk.is_modified());
        assert!(!chunk.is_deleted());
        assert!(!chunk.populated());
        assert_eq!(chunk.last_update(), 0);
        assert_eq!(chunk.inhabited_time(), 0);
    }

    #[test]
    fn test_block_out_of_range_is_silent_none() {
        let mut chunk = Chunk::new(0, 0);
        assert!(chunk.block(16, 0, 0).is_none());
        assert!(chunk.block(0, 256, 0).is_none());
        assert!(chunk.block(0, 0, 16).is_none());
        assert!(chunk.block_mut(16, 0, 0).is_none());
        assert!(chunk.block_mut(0, 256, 0).is_none());
    }

    #[test]
    fn test_block_mut_write_then_read() {
        let mut chunk = Chunk::new(0, 0);
        let block = chunk.block_mut(5, 10, 5).expect("in range");
        block.id = BlockId::STONE;
        block.data = 2;
        assert_eq!(
            chunk.block(5, 10, 5),
            Some(&Block {
                id: BlockId::STONE,
                data: 2
            })
        );
        // Neighbors untouched.
        assert_eq!(chunk.block(4, 10, 5), Some(&Block::default()));
        assert_eq!(chunk.block(5, 11, 5), Some(&Block::default()));
    }

    #[test]
    #[should_panic(expected = "height query out of range")]
    fn test_height_out_of_range_panics() {
        let chunk = Chunk::new(0, 0);
        let _ = chunk.height(16, 0);
    }

    #[test]
    fn test_recalc_single_solid_block() {
        let mut chunk = Chunk::new(0, 0);
        chunk.block_mut(5, 10, 5).expect("in range").id = BlockId::STONE;
        chunk.recalc_height_map();

        assert_eq!(chunk.height(5, 5), 10);
        for x in 0..CHUNK_SIZE_XZ {
            for z in 0..CHUNK_SIZE_XZ {
                if (x, z) != (5, 5) {
                    assert_eq!(chunk.height(x, z), 255, "column ({x}, {z})");
                }
            }
        }
    }

    #[test]
    fn test_recalc_skips_glass_and_panes() {
        let mut chunk = Chunk::new(0, 0);
        chunk.block_mut(2, 5, 2).expect("in range").id = BlockId::STONE;
        chunk.block_mut(2, 20, 2).expect("in range").id = BlockId::GLASS;
        chunk.block_mut(2, 30, 2).expect("in range").id = BlockId::GLASS_PANE;
        chunk.recalc_height_map();
        assert_eq!(chunk.height(2, 2), 5);
    }

    #[test]
    fn test_recalc_all_air_column_keeps_previous_height() {
        let mut chunk = Chunk::new(0, 0);
        chunk.block_mut(1, 42, 1).expect("in range").id = BlockId::DIRT;
        chunk.recalc_height_map();
        assert_eq!(chunk.height(1, 1), 42);

        // Column becomes entirely air again; the entry is retained, not reset.
        chunk.block_mut(1, 42, 1).expect("in range").id = BlockId::AIR;
        chunk.recalc_height_map();
        assert_eq!(chunk.height(1, 1), 42);
    }

    #[test]
    fn test_fill_solid_via_iteration_then_recalc() {
        let mut chunk = Chunk::new(0, 0);
        chunk.for_each_block(|_, _, _, block| block.id = BlockId::SANDSTONE);
        chunk.recalc_height_map();
        for x in 0..CHUNK_SIZE_XZ {
            for z in 0..CHUNK_SIZE_XZ {
                assert_eq!(chunk.height(x, z), 255, "column ({x}, {z})");
            }
        }
    }

    #[test]
    fn test_iteration_visits_every_triple_once_in_order() {
        let mut chunk = Chunk::new(0, 0);
        let mut visited = HashSet::new();
        let mut first = Vec::new();
        let mut count = 0usize;

        chunk.for_each_block(|x, y, z, _| {
            assert!(visited.insert((x, y, z)), "repeat visit at ({x}, {y}, {z})");
            if first.len() < 3 {
                first.push((x, y, z));
            }
            count += 1;
        });

        assert_eq!(count, CHUNK_VOLUME);
        assert_eq!(visited.len(), CHUNK_VOLUME);
        // Outer x, then y, then z: the innermost coordinate advances first.
        assert_eq!(first, vec![(0, 0, 0), (0, 0, 1), (0, 0, 2)]);
        assert!(visited.contains(&(15, 255, 15)));
    }

    #[test]
    fn test_biome_set_then_get_roundtrip() {
        let mut chunk = Chunk::new(0, 0);
        for x in 0..CHUNK_SIZE_XZ {
            for z in 0..CHUNK_SIZE_XZ {
                assert!(chunk.set_biome(x, z, Biome::Jungle));
                assert_eq!(chunk.biome(x, z), Some(Biome::Jungle));
            }
        }
    }

    #[test]
    fn test_biome_out_of_range_matches_block_discipline() {
        let mut chunk = Chunk::new(0, 0);
        assert_eq!(chunk.biome(16, 0), None);
        assert_eq!(chunk.biome(0, 16), None);
        assert!(!chunk.set_biome(16, 0, Biome::Desert));
        assert!(!chunk.set_biome(0, 16, Biome::Desert));
        // Failed writes leave storage untouched.
        assert_eq!(chunk.biome(15, 0), Some(Biome::Uncalculated));
    }

    #[test]
    fn test_mutation_does_not_set_dirty_flag() {
        let mut chunk = Chunk::new(0, 0);
        chunk.block_mut(0, 0, 0).expect("in range").id = BlockId::STONE;
        chunk.set_biome(0, 0, Biome::Plains);
        assert!(!chunk.is_modified());

        chunk.mark_modified();
        assert!(chunk.is_modified());
        chunk.mark_modified(); // idempotent
        assert!(chunk.is_modified());
    }

    #[test]
    fn test_modified_chunk_reaches_persistence_on_unload() {
        let mut pager = RecordingPager::default();
        let mut chunk = Chunk::new(4, 9);
        chunk.block_mut(0, 0, 0).expect("in range").id = BlockId::STONE;
        chunk.mark_modified();
        assert!(chunk.is_modified());

        chunk.mark_unused(&mut pager).expect("unload succeeds");
        assert_eq!(pager.persisted, vec![(4, 9)]);
        assert!(pager.discarded.is_empty());
    }

    #[test]
    fn test_clean_chunk_is_not_persisted_on_unload() {
        let mut pager = RecordingPager::default();
        let chunk = Chunk::new(0, 0);
        chunk.mark_unused(&mut pager).expect("unload succeeds");
        assert!(pager.persisted.is_empty());
        assert!(pager.discarded.is_empty());
    }

    #[test]
    fn test_deleted_chunk_is_discarded_not_persisted() {
        let mut pager = RecordingPager::default();
        let mut chunk = Chunk::new(-2, 11);
        chunk.mark_modified();
        chunk.mark_deleted();
        chunk.mark_deleted(); // idempotent

        chunk.mark_unused(&mut pager).expect("unload succeeds");
        assert!(pager.persisted.is_empty());
        assert_eq!(pager.discarded, vec![(-2, 11)]);
    }

    #[test]
    fn test_unload_error_propagates_verbatim() {
        let mut pager = RecordingPager {
            fail_persist: true,
            ..Default::default()
        };
        let mut chunk = Chunk::new(7, 7);
        chunk.mark_modified();

        let err = chunk.mark_unused(&mut pager).expect_err("persist fails");
        match err {
            UnloadError::Persist { x, z, .. } => {
                assert_eq!((x, z), (7, 7));
            }
        }
    }

    #[test]
    fn test_entities_and_timers_pass_through() {
        let mut chunk = Chunk::new(0, 0);
        chunk
            .entities_mut()
            .push(EntityRecord::new(serde_json::json!({"id": "Pig"})));
        assert_eq!(chunk.entities().len(), 1);

        chunk.set_last_update(123_456);
        chunk.set_inhabited_time(42);
        chunk.set_populated(true);
        assert_eq!(chunk.last_update(), 123_456);
        assert_eq!(chunk.inhabited_time(), 42);
        assert!(chunk.populated());
    }

    #[test]
    fn test_serializer_facing_arrays_have_fixed_lengths() {
        let chunk = Chunk::new(0, 0);
        assert_eq!(chunk.blocks().len(), CHUNK_VOLUME);
        assert_eq!(chunk.biomes().len(), CHUNK_AREA);
        assert_eq!(chunk.height_map().len(), CHUNK_AREA);
    }

    #[test]
    fn test_storage_order_matches_packed_offset() {
        let mut chunk = Chunk::new(0, 0);
        chunk.block_mut(3, 7, 9).expect("in range").id = BlockId::LOG;
        let off = crate::addressing::block_offset(3, 7, 9).expect("in range");
        assert_eq!(chunk.blocks()[off].id, BlockId::LOG);
    }
}
