//! Game session: one world cache and one traveler, replaced together on
//! restart.

use tracing::info;
use wayfarer_terrain::{ChunkGenerator, GeneratorParams, WorldCache};
use wayfarer_tiles::{CatalogError, Chunk, ChunkCoord, StructureCatalog};

use crate::traveler::{Direction, MoveOutcome, Traveler};

/// A running game: the world and the traveler exploring it.
pub struct Session {
    fixed_seed: Option<u64>,
    params: GeneratorParams,
    catalog: StructureCatalog,
    world: WorldCache,
    traveler: Traveler,
}

impl Session {
    /// Starts a session with default generator parameters.
    ///
    /// With `None` a random seed is drawn, and drawn again on every restart.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_params(seed, GeneratorParams::default())
    }

    /// Starts a session with explicit generator parameters. `params.seed` is
    /// replaced by `seed`, or by a random seed when `seed` is `None`.
    pub fn with_params(seed: Option<u64>, params: GeneratorParams) -> Self {
        Self::build(seed, params, StructureCatalog::default())
    }

    /// Starts a session that stamps structures from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns the [`CatalogError`] from [`StructureCatalog::validate`] when
    /// the catalog cannot be used for urban generation.
    pub fn with_catalog(
        seed: Option<u64>,
        params: GeneratorParams,
        catalog: StructureCatalog,
    ) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self::build(seed, params, catalog))
    }

    fn build(seed: Option<u64>, params: GeneratorParams, catalog: StructureCatalog) -> Self {
        let (world, traveler) = Self::fresh_pair(seed, &params, &catalog);
        Self {
            fixed_seed: seed,
            params,
            catalog,
            world,
            traveler,
        }
    }

    fn fresh_pair(
        seed: Option<u64>,
        params: &GeneratorParams,
        catalog: &StructureCatalog,
    ) -> (WorldCache, Traveler) {
        let params = GeneratorParams {
            seed: seed.unwrap_or_else(rand::random),
            ..params.clone()
        };
        let generator = ChunkGenerator::with_catalog(params, catalog.clone());
        let mut world = WorldCache::with_generator(generator);
        let traveler = Traveler::new();
        world.get_chunk(traveler.chunk());
        (world, traveler)
    }

    /// Discards the world and traveler and starts over.
    pub fn restart(&mut self) {
        let (world, traveler) = Self::fresh_pair(self.fixed_seed, &self.params, &self.catalog);
        self.world = world;
        self.traveler = traveler;
        info!(seed = self.world.seed(), "session restarted");
    }

    /// Moves the traveler one step.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        self.traveler.step(direction, &mut self.world)
    }

    /// The chunk the traveler stands in, generated if necessary.
    pub fn current_chunk(&mut self) -> &Chunk {
        self.world.get_chunk(self.traveler.chunk())
    }

    /// Any chunk of this session's world, generated if necessary.
    pub fn chunk_at(&mut self, coord: ChunkCoord) -> &Chunk {
        self.world.get_chunk(coord)
    }

    /// The world cache.
    pub fn world(&self) -> &WorldCache {
        &self.world
    }

    /// The traveler.
    pub fn traveler(&self) -> &Traveler {
        &self.traveler
    }
}
