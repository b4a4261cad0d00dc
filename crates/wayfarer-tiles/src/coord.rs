//! Chunk-grid addressing for an unbounded 2-D world.

use serde::{Deserialize, Serialize};

/// Identifies a chunk's position in the world grid.
///
/// Coordinates are signed and unbounded in every direction. `x` grows to
/// the east and `y` grows to the south, matching row-major tile order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkCoord {
    /// Chunk-grid X coordinate.
    pub x: i64,
    /// Chunk-grid Y coordinate.
    pub y: i64,
}

impl ChunkCoord {
    /// The chunk every session starts in.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a new chunk coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate of the chunk offset by `(dx, dy)`.
    ///
    /// Each axis wraps at the `i64` range, so stepping east from
    /// `i64::MAX` lands on `i64::MIN`.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Packs both axes into a single `u64` (x in the high half).
    ///
    /// Only the low 32 bits of each axis survive, so this is a stable
    /// identifier for logging and seeding, not a lossless encoding.
    pub fn packed(self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_moves_one_axis() {
        let c = ChunkCoord::new(3, -2);
        assert_eq!(c.offset(1, 0), ChunkCoord::new(4, -2));
        assert_eq!(c.offset(0, -1), ChunkCoord::new(3, -3));
    }

    #[test]
    fn test_packed_distinguishes_neighbours() {
        let origin = ChunkCoord::ORIGIN;
        let neighbours = [
            origin.offset(1, 0),
            origin.offset(-1, 0),
            origin.offset(0, 1),
            origin.offset(0, -1),
        ];
        for n in neighbours {
            assert_ne!(
                origin.packed(),
                n.packed(),
                "Packed key of {n} collides with origin"
            );
        }
        assert_ne!(
            ChunkCoord::new(1, 2).packed(),
            ChunkCoord::new(2, 1).packed(),
            "Axes must not be interchangeable in the packed key"
        );
    }

    #[test]
    fn test_offset_wraps_at_axis_limits() {
        assert_eq!(
            ChunkCoord::new(i64::MAX, 0).offset(1, 0),
            ChunkCoord::new(i64::MIN, 0)
        );
        assert_eq!(
            ChunkCoord::new(5, i64::MIN).offset(0, -1),
            ChunkCoord::new(5, i64::MAX)
        );
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ChunkCoord::new(-4, 7).to_string(), "(-4, 7)");
    }
}
