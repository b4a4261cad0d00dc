//! Biome system: the closed set of biome kinds and the memoizing classifier
//! that assigns one to every chunk coordinate.

mod classifier;
mod kind;

pub use classifier::BiomeClassifier;
pub use kind::Biome;
