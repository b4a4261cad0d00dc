//! Biome classifier: samples a broad, low-detail noise field once per chunk
//! coordinate and remembers the answer.

use rustc_hash::FxHashMap;
use wayfarer_tiles::ChunkCoord;

use super::Biome;
use crate::noise_field::NoiseField;
use crate::seed::{BIOME_LAYER, layer_seed};

/// Assigns a [`Biome`] to every chunk coordinate, memoized.
///
/// The biome field is sampled at `(cx * scale, cy * scale)`, so a single
/// noise feature spans many chunks and biomes form large contiguous regions.
pub struct BiomeClassifier {
    field: NoiseField,
    scale: f64,
    cache: FxHashMap<ChunkCoord, Biome>,
}

impl BiomeClassifier {
    /// Number of octaves in the biome field.
    pub const OCTAVES: u32 = 2;

    /// Creates a classifier for the given world seed and per-chunk scale.
    pub fn new(world_seed: u64, scale: f64) -> Self {
        Self {
            field: NoiseField::new(layer_seed(world_seed, BIOME_LAYER), Self::OCTAVES),
            scale,
            cache: FxHashMap::default(),
        }
    }

    /// Returns the biome of `coord`, sampling the field only on first request.
    pub fn biome_of(&mut self, coord: ChunkCoord) -> Biome {
        let (field, scale) = (&self.field, self.scale);
        *self.cache.entry(coord).or_insert_with(|| {
            Biome::from_noise(field.sample(coord.x as f64 * scale, coord.y as f64 * scale))
        })
    }

    /// Returns the memoized biome without sampling.
    pub fn cached(&self, coord: ChunkCoord) -> Option<Biome> {
        self.cache.get(&coord).copied()
    }

    /// Number of coordinates classified so far.
    pub fn classified_count(&self) -> usize {
        self.cache.len()
    }
}
