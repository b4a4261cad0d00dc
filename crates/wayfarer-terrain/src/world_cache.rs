//! Central owner for all generated chunks, keyed by [`ChunkCoord`].
//!
//! The [`WorldCache`] generates a chunk the first time it is requested and
//! hands out the stored grid on every later request. Stored chunks are never
//! regenerated or replaced, and nothing is evicted.

use std::collections::BTreeSet;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::{debug, info};
use wayfarer_tiles::{Chunk, ChunkCoord};

use crate::biome::Biome;
use crate::generator::{ChunkGenerator, GeneratorParams};

/// Read-through cache of generated chunks for one game session.
pub struct WorldCache {
    generator: ChunkGenerator,
    chunks: FxHashMap<ChunkCoord, Chunk>,
}

impl WorldCache {
    /// Creates an empty cache for the given world seed with default parameters.
    pub fn new(seed: u64) -> Self {
        Self::with_params(GeneratorParams::with_seed(seed))
    }

    /// Creates an empty cache with explicit generator parameters.
    pub fn with_params(params: GeneratorParams) -> Self {
        Self::with_generator(ChunkGenerator::new(params))
    }

    /// Creates an empty cache backed by an existing generator.
    pub fn with_generator(generator: ChunkGenerator) -> Self {
        info!(seed = generator.params().seed, "world cache created");
        Self {
            generator,
            chunks: FxHashMap::default(),
        }
    }

    /// The world seed.
    pub fn seed(&self) -> u64 {
        self.generator.params().seed
    }

    /// Returns the chunk at `coord`, generating and storing it on first access.
    pub fn get_chunk(&mut self, coord: ChunkCoord) -> &Chunk {
        match self.chunks.entry(coord) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let biome = self.generator.biome_of(coord);
                debug!(%coord, key = coord.packed(), %biome, "generating chunk");
                entry.insert(self.generator.generate(coord))
            }
        }
    }

    /// Returns the chunk at `coord` only if it has already been generated.
    pub fn peek_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Memoized biome of `coord`; does not generate the chunk.
    pub fn biome_of(&mut self, coord: ChunkCoord) -> Biome {
        self.generator.biome_of(coord)
    }

    /// Every chunk coordinate generated so far.
    pub fn all_visited(&self) -> BTreeSet<ChunkCoord> {
        self.chunks.keys().copied().collect()
    }

    /// Number of chunks generated so far.
    pub fn visited_count(&self) -> usize {
        self.chunks.len()
    }

    /// Minimum and maximum corners of the visited area, or `None` before any
    /// chunk has been generated.
    pub fn visited_bounds(&self) -> Option<(ChunkCoord, ChunkCoord)> {
        let mut keys = self.chunks.keys();
        let first = *keys.next()?;
        Some(keys.fold((first, first), |(min, max), c| {
            (
                ChunkCoord::new(min.x.min(c.x), min.y.min(c.y)),
                ChunkCoord::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// The generator backing this cache.
    pub fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::global_position;
    use crate::noise_field::NoiseField;
    use crate::seed::{TERRAIN_LAYER, layer_seed};
    use wayfarer_tiles::{CHUNK_HEIGHT, CHUNK_WIDTH, Tile};

    #[test]
    fn test_get_chunk_twice_is_identical() {
        let mut cache = WorldCache::new(123);
        let first = cache.get_chunk(ChunkCoord::ORIGIN).clone();
        let second = cache.get_chunk(ChunkCoord::ORIGIN);
        assert_eq!(&first, second);
    }

    #[test]
    fn test_get_chunk_returns_stored_grid() {
        let mut cache = WorldCache::new(5);
        let ptr_a = cache.get_chunk(ChunkCoord::new(2, 2)).tiles().as_ptr();
        cache.get_chunk(ChunkCoord::new(3, 2));
        let ptr_b = cache.get_chunk(ChunkCoord::new(2, 2)).tiles().as_ptr();
        assert_eq!(ptr_a, ptr_b, "A cached chunk must not be regenerated");
    }

    #[test]
    fn test_same_seed_caches_agree() {
        let mut a = WorldCache::new(2024);
        let mut b = WorldCache::new(2024);
        for c in [ChunkCoord::new(0, 0), ChunkCoord::new(-1, 4), ChunkCoord::new(17, -3)] {
            assert_eq!(a.get_chunk(c), b.get_chunk(c), "Chunk {c} differs");
        }
    }

    #[test]
    fn test_visited_contains_origin_once() {
        let mut cache = WorldCache::new(1);
        assert!(cache.all_visited().is_empty());
        for _ in 0..5 {
            cache.get_chunk(ChunkCoord::ORIGIN);
        }
        let visited = cache.all_visited();
        assert_eq!(visited.len(), 1);
        assert!(visited.contains(&ChunkCoord::ORIGIN));
        assert_eq!(cache.visited_count(), 1);
    }

    #[test]
    fn test_peek_does_not_generate() {
        let mut cache = WorldCache::new(1);
        assert!(cache.peek_chunk(ChunkCoord::ORIGIN).is_none());
        cache.biome_of(ChunkCoord::ORIGIN);
        assert!(cache.all_visited().is_empty(), "biome_of must not generate");
        cache.get_chunk(ChunkCoord::ORIGIN);
        assert!(cache.peek_chunk(ChunkCoord::ORIGIN).is_some());
    }

    #[test]
    fn test_visited_bounds() {
        let mut cache = WorldCache::new(1);
        assert_eq!(cache.visited_bounds(), None);
        for c in [ChunkCoord::new(0, 0), ChunkCoord::new(-2, 1), ChunkCoord::new(3, -1)] {
            cache.get_chunk(c);
        }
        assert_eq!(
            cache.visited_bounds(),
            Some((ChunkCoord::new(-2, -1), ChunkCoord::new(3, 1)))
        );
    }

    #[test]
    fn test_biome_matches_generated_chunk() {
        let mut cache = WorldCache::new(123);
        for x in (-200..200).step_by(25) {
            let c = ChunkCoord::new(x, x / 2);
            let before = cache.biome_of(c);
            let chunk = cache.get_chunk(c).clone();
            assert_eq!(cache.biome_of(c), before, "Biome of {c} changed");
            let paved = chunk.count(Tile::Pavement) > 0;
            assert_eq!(paved, before == Biome::Urban, "Chunk {c} contradicts its biome");
        }
    }

    #[test]
    fn test_seeded_outlands_scenario() {
        let mut cache = WorldCache::new(123);
        let outlands: Vec<_> = (-400..400)
            .step_by(9)
            .map(|x| ChunkCoord::new(x, 0))
            .filter(|&c| cache.biome_of(c) == Biome::Outlands)
            .take(12)
            .collect();
        assert!(!outlands.is_empty(), "Seed 123 should have outlands on row 0");

        let params = cache.generator().params().clone();
        let mut water = None;
        let mut rock = None;
        let mut open = None;
        for &c in &outlands {
            let chunk = cache.get_chunk(c).clone();
            for y in 1..CHUNK_HEIGHT - 1 {
                for x in 1..CHUNK_WIDTH - 1 {
                    let (gx, gy) = global_position(c, x, y);
                    let tile = chunk.get(x, y);
                    assert_eq!(tile, cache.generator().classify_outlands(gx, gy));
                    let slot = match tile {
                        Tile::Water => &mut water,
                        Tile::Rock => &mut rock,
                        Tile::Empty | Tile::Bush => &mut open,
                        other => panic!("Unexpected outlands tile {other:?} in {c}"),
                    };
                    slot.get_or_insert((gx, gy));
                }
            }
            if water.is_some() && rock.is_some() && open.is_some() {
                break;
            }
        }

        let terrain = NoiseField::new(layer_seed(123, TERRAIN_LAYER), params.terrain_octaves);
        let level = |(gx, gy): (i64, i64)| {
            terrain.sample(gx as f64 * params.terrain_scale, gy as f64 * params.terrain_scale)
        };
        let water = water.expect("a water cell");
        let rock = rock.expect("a rock cell");
        let open = open.expect("an empty or bush cell");
        assert!(level(water) < 0.35, "Water at {water:?} above 0.35");
        assert!(level(rock) >= 0.65, "Rock at {rock:?} below 0.65");
        assert!((0.35..0.65).contains(&level(open)), "Open cell at {open:?} out of band");
    }
}
