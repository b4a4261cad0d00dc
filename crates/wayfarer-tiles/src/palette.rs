//! Glyph palette: maps semantic [`Tile`] kinds to display characters.
//!
//! Generation never looks at glyphs; only presentation code does. Structure
//! tiles already carry their template glyph and render as-is.

use serde::{Deserialize, Serialize};

use crate::chunk::{Chunk, Tile};

/// Display glyph for every non-structure tile kind, plus the traveler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Open ground.
    pub empty: char,
    /// Chunk border.
    pub wall: char,
    /// Rock outcrop.
    pub rock: char,
    /// Bush.
    pub bush: char,
    /// Water.
    pub water: char,
    /// Urban pavement.
    pub pavement: char,
    /// The traveler overlay.
    pub traveler: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: ' ',
            wall: '#',
            rock: 'o',
            bush: '*',
            water: '~',
            pavement: '.',
            traveler: '@',
        }
    }
}

impl Palette {
    /// Returns the glyph used to draw `tile`.
    pub fn glyph(&self, tile: Tile) -> char {
        match tile {
            Tile::Empty => self.empty,
            Tile::Wall => self.wall,
            Tile::Rock => self.rock,
            Tile::Bush => self.bush,
            Tile::Water => self.water,
            Tile::Pavement => self.pavement,
            Tile::Structure(glyph) => glyph,
        }
    }

    /// Renders a chunk into one string per row.
    pub fn render_chunk(&self, chunk: &Chunk) -> Vec<String> {
        chunk
            .rows()
            .map(|row| row.iter().map(|&t| self.glyph(t)).collect())
            .collect()
    }
}
