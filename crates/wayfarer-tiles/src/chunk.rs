//! Fixed-size tile grids for 80×24 world chunks.
//!
//! [`TileGrid`] is the mutable form used while a chunk is being generated.
//! Once generation finishes it is frozen into a [`Chunk`], which exposes
//! read-only access only.

use serde::{Deserialize, Serialize};

/// Width of a chunk in tiles.
pub const CHUNK_WIDTH: usize = 80;

/// Height of a chunk in tiles.
pub const CHUNK_HEIGHT: usize = 24;

/// Total number of tiles in a chunk (80 × 24).
pub const CHUNK_AREA: usize = CHUNK_WIDTH * CHUNK_HEIGHT;

/// A single cell of world content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Open ground.
    #[default]
    Empty,
    /// Impassable chunk border.
    Wall,
    /// Outcrop on high terrain.
    Rock,
    /// Vegetation on mid-level terrain.
    Bush,
    /// Low terrain.
    Water,
    /// Base fill of urban chunks.
    Pavement,
    /// One cell of a stamped structure, carrying its template glyph.
    Structure(char),
}

impl Tile {
    /// Returns `true` for the only tile kind that blocks movement.
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Mutable tile storage for a chunk under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid with every cell set to `fill`.
    pub fn new(fill: Tile) -> Self {
        Self {
            tiles: vec![fill; CHUNK_AREA],
        }
    }

    /// Returns the tile at local `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.tiles[linear_index(x, y)]
    }

    /// Sets the tile at local `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[linear_index(x, y)] = tile;
    }

    /// Overwrites the outermost ring of cells with `tile`.
    pub fn fill_border(&mut self, tile: Tile) {
        for x in 0..CHUNK_WIDTH {
            self.set(x, 0, tile);
            self.set(x, CHUNK_HEIGHT - 1, tile);
        }
        for y in 0..CHUNK_HEIGHT {
            self.set(0, y, tile);
            self.set(CHUNK_WIDTH - 1, y, tile);
        }
    }

    /// Freezes the grid into an immutable [`Chunk`].
    pub fn into_chunk(self) -> Chunk {
        Chunk { tiles: self.tiles }
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(Tile::Empty)
    }
}

/// An immutable, fully generated chunk.
///
/// Rows are stored contiguously; `rows()` yields `CHUNK_HEIGHT` slices of
/// `CHUNK_WIDTH` tiles each.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chunk {
    tiles: Vec<Tile>,
}

impl Chunk {
    /// Returns the tile at local `(x, y)`.
    ///
    /// `x` must be in `0..CHUNK_WIDTH` and `y` in `0..CHUNK_HEIGHT`.
    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.tiles[linear_index(x, y)]
    }

    /// Iterates over the rows of the chunk, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks_exact(CHUNK_WIDTH)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Counts cells holding exactly `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

/// Converts `(x, y)` to a row-major linear index.
fn linear_index(x: usize, y: usize) -> usize {
    debug_assert!(x < CHUNK_WIDTH && y < CHUNK_HEIGHT, "({x}, {y}) out of chunk");
    y * CHUNK_WIDTH + x
}
