//! Chunk generation pipeline: biome lookup, biome-specific fill, and the
//! border-wall post-pass.

use tracing::trace;
use wayfarer_tiles::{
    CHUNK_HEIGHT, CHUNK_WIDTH, Chunk, ChunkCoord, StructureCatalog, Tile, TileGrid,
};

use crate::biome::{Biome, BiomeClassifier};
use crate::noise_field::NoiseField;
use crate::seed::{FEATURE_LAYER, PLACEMENT_LAYER, TERRAIN_LAYER, chunk_rng, layer_seed};
use crate::structure::{PlacedStructure, StructurePlacer};

/// Tunable parameters for chunk generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorParams {
    /// World seed for deterministic generation.
    pub seed: u64,
    /// Coordinate scale applied to global tile positions for terrain noise.
    pub terrain_scale: f64,
    /// Octaves in the terrain field.
    pub terrain_octaves: u32,
    /// Octaves in the bush/feature field (sampled at twice the terrain frequency).
    pub feature_octaves: u32,
    /// Coordinate scale applied to chunk coordinates for biome noise.
    pub biome_scale: f64,
    /// Coordinate scale applied to global tile positions for structure placement.
    pub placement_scale: f64,
    /// Placement noise must exceed this for an anchor to receive a structure.
    pub placement_threshold: f64,
    /// Terrain values below this are water.
    pub water_level: f64,
    /// Terrain values at or above this are rock.
    pub rock_level: f64,
    /// Feature values above this turn mid-level ground into bush.
    pub bush_level: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed: 0,
            terrain_scale: 0.05,
            terrain_octaves: 4,
            feature_octaves: 2,
            biome_scale: 0.02,
            placement_scale: 0.3,
            placement_threshold: 0.65,
            water_level: 0.35,
            rock_level: 0.65,
            bush_level: 0.8,
        }
    }
}

impl GeneratorParams {
    /// Default parameters with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// Produces tile grids for chunks, one coordinate at a time.
///
/// Generation is total: every integer coordinate yields a chunk. The output
/// depends only on the coordinate and [`GeneratorParams`], never on the
/// order in which chunks are requested.
pub struct ChunkGenerator {
    params: GeneratorParams,
    terrain: NoiseField,
    feature: NoiseField,
    placement: NoiseField,
    biomes: BiomeClassifier,
    catalog: StructureCatalog,
}

impl ChunkGenerator {
    /// Create a generator with the default structure catalog.
    pub fn new(params: GeneratorParams) -> Self {
        Self::with_catalog(params, StructureCatalog::default())
    }

    /// Create a generator with a custom structure catalog.
    pub fn with_catalog(params: GeneratorParams, catalog: StructureCatalog) -> Self {
        let seed = params.seed;
        Self {
            terrain: NoiseField::new(layer_seed(seed, TERRAIN_LAYER), params.terrain_octaves),
            feature: NoiseField::new(layer_seed(seed, FEATURE_LAYER), params.feature_octaves),
            placement: NoiseField::new(layer_seed(seed, PLACEMENT_LAYER), 2),
            biomes: BiomeClassifier::new(seed, params.biome_scale),
            catalog,
            params,
        }
    }

    /// The parameters this generator was built with.
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// The structure catalog used for urban chunks.
    pub fn catalog(&self) -> &StructureCatalog {
        &self.catalog
    }

    /// Memoized biome of the chunk at `coord`.
    pub fn biome_of(&mut self, coord: ChunkCoord) -> Biome {
        self.biomes.biome_of(coord)
    }

    /// Generate the chunk at `coord`.
    pub fn generate(&mut self, coord: ChunkCoord) -> Chunk {
        self.generate_with_layout(coord).0
    }

    /// Generate the chunk at `coord`, also returning the structures stamped
    /// into it (always empty outside urban chunks).
    pub fn generate_with_layout(&mut self, coord: ChunkCoord) -> (Chunk, Vec<PlacedStructure>) {
        let biome = self.biomes.biome_of(coord);
        let (mut grid, layout) = match biome {
            Biome::Outlands => (self.fill_outlands(coord), Vec::new()),
            Biome::Urban => self.fill_urban(coord),
        };
        grid.fill_border(Tile::Wall);
        trace!(%coord, %biome, structures = layout.len(), "chunk filled");
        (grid.into_chunk(), layout)
    }

    /// Classify one outlands cell from its global tile position.
    ///
    /// Terrain below the water level is water and at or above the rock level
    /// is rock. In between, the feature field (at twice the terrain
    /// frequency) decides between bush and open ground.
    pub fn classify_outlands(&self, gx: i64, gy: i64) -> Tile {
        let scale = self.params.terrain_scale;
        let (x, y) = (gx as f64 * scale, gy as f64 * scale);
        let v = self.terrain.sample(x, y);

        if v < self.params.water_level {
            Tile::Water
        } else if v < self.params.rock_level {
            if self.feature.sample(x * 2.0, y * 2.0) > self.params.bush_level {
                Tile::Bush
            } else {
                Tile::Empty
            }
        } else {
            Tile::Rock
        }
    }

    fn fill_outlands(&self, coord: ChunkCoord) -> TileGrid {
        let mut grid = TileGrid::default();
        for y in 0..CHUNK_HEIGHT {
            for x in 0..CHUNK_WIDTH {
                let (gx, gy) = global_position(coord, x, y);
                grid.set(x, y, self.classify_outlands(gx, gy));
            }
        }
        grid
    }

    fn fill_urban(&self, coord: ChunkCoord) -> (TileGrid, Vec<PlacedStructure>) {
        let mut grid = TileGrid::new(Tile::Pavement);
        let placer = StructurePlacer::new(
            &self.catalog,
            &self.placement,
            self.params.placement_scale,
            self.params.placement_threshold,
        );
        let mut rng = chunk_rng(self.params.seed, coord);
        let layout = placer.place(&mut grid, coord, &mut rng);
        (grid, layout)
    }
}

/// Global tile position of a chunk's top-left cell.
///
/// Wraps at the `i64` range, so every chunk coordinate has a position.
pub fn global_origin(coord: ChunkCoord) -> (i64, i64) {
    (
        coord.x.wrapping_mul(CHUNK_WIDTH as i64),
        coord.y.wrapping_mul(CHUNK_HEIGHT as i64),
    )
}

/// Global tile position of local cell `(x, y)` in the chunk at `coord`.
pub fn global_position(coord: ChunkCoord, x: usize, y: usize) -> (i64, i64) {
    let (origin_x, origin_y) = global_origin(coord);
    (
        origin_x.wrapping_add(x as i64),
        origin_y.wrapping_add(y as i64),
    )
}
