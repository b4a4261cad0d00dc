//! Urban structure placement: noise-gated, first-fit stamping of catalog
//! templates with a one-cell clearance around every placed footprint.

use rand::Rng;
use wayfarer_tiles::{
    CHUNK_AREA, CHUNK_HEIGHT, CHUNK_WIDTH, ChunkCoord, StructureCatalog, Tile, TileGrid,
};

use crate::generator::global_position;
use crate::noise_field::NoiseField;

/// A structure stamped into a chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedStructure {
    /// Catalog template name.
    pub name: String,
    /// Local x of the top-left footprint cell.
    pub x: usize,
    /// Local y of the top-left footprint cell.
    pub y: usize,
    /// Footprint width.
    pub width: usize,
    /// Footprint height.
    pub height: usize,
}

impl PlacedStructure {
    /// Inclusive `(min_x, min_y, max_x, max_y)` of the footprint grown by the
    /// one-cell buffer.
    pub fn buffered_bounds(&self) -> (usize, usize, usize, usize) {
        (
            self.x.saturating_sub(1),
            self.y.saturating_sub(1),
            self.x + self.width,
            self.y + self.height,
        )
    }

    /// Returns `true` if the buffered footprints of `self` and `other` share
    /// any cell.
    pub fn overlaps_buffered(&self, other: &PlacedStructure) -> bool {
        let (ax0, ay0, ax1, ay1) = self.buffered_bounds();
        let (bx0, by0, bx1, by1) = other.buffered_bounds();
        ax0 <= bx1 && bx0 <= ax1 && ay0 <= by1 && by0 <= ay1
    }

    /// Returns `true` if local `(x, y)` lies in the unbuffered footprint.
    pub fn covers(&self, x: usize, y: usize) -> bool {
        (self.x..self.x + self.width).contains(&x) && (self.y..self.y + self.height).contains(&y)
    }
}

/// Cells claimed by placed structures and their buffers.
struct OccupancyMask {
    cells: Vec<bool>,
}

impl OccupancyMask {
    fn new() -> Self {
        Self {
            cells: vec![false; CHUNK_AREA],
        }
    }

    fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[y * CHUNK_WIDTH + x]
    }

    /// Cells of the footprint at `(x, y, w, h)` grown by one, clipped to the chunk.
    fn buffered_cells(
        x: usize,
        y: usize,
        w: usize,
        h: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let xs = x.saturating_sub(1)..(x + w + 1).min(CHUNK_WIDTH);
        let ys = y.saturating_sub(1)..(y + h + 1).min(CHUNK_HEIGHT);
        ys.flat_map(move |cy| xs.clone().map(move |cx| (cx, cy)))
    }

    fn is_clear(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        Self::buffered_cells(x, y, w, h).all(|(cx, cy)| !self.is_occupied(cx, cy))
    }

    fn claim(&mut self, x: usize, y: usize, w: usize, h: usize) {
        for (cx, cy) in Self::buffered_cells(x, y, w, h) {
            self.cells[cy * CHUNK_WIDTH + cx] = true;
        }
    }
}

/// Stamps catalog structures onto a paved chunk.
///
/// Anchors are scanned in row-major order. An unoccupied anchor whose
/// placement noise exceeds the threshold draws a template from the catalog;
/// the template is stamped only if it stays inside the border walls and
/// neither it nor its one-cell buffer touches a claimed cell.
pub struct StructurePlacer<'a> {
    catalog: &'a StructureCatalog,
    field: &'a NoiseField,
    scale: f64,
    threshold: f64,
}

impl<'a> StructurePlacer<'a> {
    /// Create a placer over the given catalog and placement noise.
    pub fn new(
        catalog: &'a StructureCatalog,
        field: &'a NoiseField,
        scale: f64,
        threshold: f64,
    ) -> Self {
        Self {
            catalog,
            field,
            scale,
            threshold,
        }
    }

    /// Place structures into `grid` for the chunk at `coord`.
    ///
    /// `rng` picks the template for each anchor that passes the noise gate;
    /// pass a per-chunk stream to keep placement reproducible.
    pub fn place(
        &self,
        grid: &mut TileGrid,
        coord: ChunkCoord,
        rng: &mut impl Rng,
    ) -> Vec<PlacedStructure> {
        let mut placed = Vec::new();
        if self.catalog.is_empty() {
            return placed;
        }

        let mut mask = OccupancyMask::new();
        let max_x = CHUNK_WIDTH.saturating_sub(self.catalog.max_width());
        let max_y = CHUNK_HEIGHT.saturating_sub(self.catalog.max_height());

        for y in 1..max_y {
            for x in 1..max_x {
                if mask.is_occupied(x, y) {
                    continue;
                }

                let (gx, gy) = global_position(coord, x, y);
                let level = self.field.sample(gx as f64 * self.scale, gy as f64 * self.scale);
                if level <= self.threshold {
                    continue;
                }

                let template = &self.catalog.templates[rng.random_range(0..self.catalog.len())];
                let (w, h) = (template.width(), template.height());
                let inside = x + w < CHUNK_WIDTH && y + h < CHUNK_HEIGHT;
                if !inside || !mask.is_clear(x, y, w, h) {
                    continue;
                }

                for ty in 0..h {
                    for tx in 0..w {
                        if let Some(glyph) = template.glyph_at(tx, ty, self.catalog.blank) {
                            grid.set(x + tx, y + ty, Tile::Structure(glyph));
                        }
                    }
                }
                mask.claim(x, y, w, h);
                placed.push(PlacedStructure {
                    name: template.name.clone(),
                    x,
                    y,
                    width: w,
                    height: h,
                });
            }
        }

        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn place_with_threshold(threshold: f64) -> (TileGrid, Vec<PlacedStructure>) {
        let catalog = StructureCatalog::default();
        let field = NoiseField::new(11, 2);
        let placer = StructurePlacer::new(&catalog, &field, 0.3, threshold);
        let mut grid = TileGrid::new(Tile::Pavement);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let placed = placer.place(&mut grid, ChunkCoord::new(2, -1), &mut rng);
        (grid, placed)
    }

    #[test]
    fn test_unreachable_threshold_places_nothing() {
        let (grid, placed) = place_with_threshold(1.0);
        assert!(placed.is_empty());
        assert_eq!(grid.into_chunk().count(Tile::Pavement), CHUNK_AREA);
    }

    #[test]
    fn test_first_anchor_wins_when_gate_always_open() {
        let (_grid, placed) = place_with_threshold(-1.0);
        let first = placed.first().expect("open gate must place something");
        assert_eq!((first.x, first.y), (1, 1), "Row-major scan must claim (1, 1) first");
    }

    #[test]
    fn test_buffered_footprints_never_overlap() {
        let (_grid, placed) = place_with_threshold(-1.0);
        assert!(placed.len() > 10, "Expected a dense layout, got {}", placed.len());
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(!a.overlaps_buffered(b), "{a:?} touches {b:?}");
            }
        }
    }

    #[test]
    fn test_structures_stay_inside_walls() {
        let (_grid, placed) = place_with_threshold(-1.0);
        for p in &placed {
            assert!(p.x >= 1 && p.y >= 1, "{p:?} starts on the border");
            assert!(p.x + p.width <= CHUNK_WIDTH - 1, "{p:?} reaches the east wall");
            assert!(p.y + p.height <= CHUNK_HEIGHT - 1, "{p:?} reaches the south wall");
        }
    }

    #[test]
    fn test_stamped_cells_match_templates() {
        let catalog = StructureCatalog::default();
        let (grid, placed) = place_with_threshold(-1.0);
        for p in &placed {
            let template = catalog.get(&p.name).expect("placed from catalog");
            for ty in 0..p.height {
                for tx in 0..p.width {
                    let expected = match template.glyph_at(tx, ty, catalog.blank) {
                        Some(g) => Tile::Structure(g),
                        None => Tile::Pavement,
                    };
                    assert_eq!(grid.get(p.x + tx, p.y + ty), expected);
                }
            }
        }
    }

    #[test]
    fn test_cells_outside_footprints_stay_paved() {
        let (grid, placed) = place_with_threshold(-1.0);
        for y in 0..CHUNK_HEIGHT {
            for x in 0..CHUNK_WIDTH {
                if !placed.iter().any(|p| p.covers(x, y)) {
                    assert_eq!(grid.get(x, y), Tile::Pavement, "Stray stamp at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_empty_catalog_is_a_no_op() {
        let catalog = StructureCatalog {
            templates: Vec::new(),
            blank: ' ',
        };
        let field = NoiseField::new(1, 2);
        let placer = StructurePlacer::new(&catalog, &field, 0.3, -1.0);
        let mut grid = TileGrid::new(Tile::Pavement);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(placer.place(&mut grid, ChunkCoord::ORIGIN, &mut rng).is_empty());
    }

    #[test]
    fn test_overlap_detection() {
        let a = PlacedStructure {
            name: "a".into(),
            x: 5,
            y: 5,
            width: 3,
            height: 2,
        };
        let touching = PlacedStructure {
            name: "b".into(),
            x: 9,
            y: 5,
            width: 2,
            height: 2,
        };
        let clear = PlacedStructure {
            name: "c".into(),
            x: 10,
            y: 5,
            width: 2,
            height: 2,
        };
        assert!(a.overlaps_buffered(&touching));
        assert!(!a.overlaps_buffered(&clear));
    }
}
