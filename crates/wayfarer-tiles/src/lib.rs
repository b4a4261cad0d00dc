//! Tile palette, chunk grids, chunk coordinates, and the glyph asset tables
//! consumed by world generation.

pub mod catalog;
pub mod chunk;
pub mod coord;
pub mod palette;

pub use catalog::{CatalogError, StructureCatalog, StructureTemplate};
pub use chunk::{CHUNK_AREA, CHUNK_HEIGHT, CHUNK_WIDTH, Chunk, Tile, TileGrid};
pub use coord::ChunkCoord;
pub use palette::Palette;
