//! Procedural terrain for an unbounded chunked 2-D world: layered noise,
//! biome classification, chunk generation, and the session chunk cache.

pub mod biome;
pub mod generator;
pub mod noise_field;
pub mod seed;
pub mod structure;
pub mod world_cache;

pub use biome::{Biome, BiomeClassifier};
pub use generator::{ChunkGenerator, GeneratorParams, global_origin, global_position};
pub use noise_field::NoiseField;
pub use structure::{PlacedStructure, StructurePlacer};
pub use world_cache::WorldCache;
