//! The traveler: chunk-plus-local position and cardinal movement with
//! wall collision and chunk-edge transitions.

use tracing::trace;
use wayfarer_terrain::WorldCache;
use wayfarer_tiles::{CHUNK_HEIGHT, CHUNK_WIDTH, Chunk, ChunkCoord};

/// Read-through access to chunk data for movement checks.
///
/// The traveler never generates terrain itself; it asks a source, which
/// may generate on demand.
pub trait ChunkSource {
    /// Returns the chunk at `coord`, producing it if needed.
    fn chunk(&mut self, coord: ChunkCoord) -> &Chunk;
}

impl ChunkSource for WorldCache {
    fn chunk(&mut self, coord: ChunkCoord) -> &Chunk {
        self.get_chunk(coord)
    }
}

/// One of the four cardinal unit steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last row.
    South,
    /// Towards the last column.
    East,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The `(dx, dy)` offset of this step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Parses `N`, `S`, `E`, or `W` (either case).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

/// What a single move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The traveler stepped to a neighbouring cell in the same chunk.
    Moved,
    /// The destination was a wall; nothing changed.
    Blocked,
    /// The traveler left through an edge into the given chunk.
    Crossed(ChunkCoord),
}

/// Snapshot of where the traveler stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TravelerPosition {
    /// Chunk the traveler is in.
    pub chunk: ChunkCoord,
    /// Local column.
    pub x: usize,
    /// Local row.
    pub y: usize,
}

/// The movable actor, tracked in chunk and local coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traveler {
    chunk: ChunkCoord,
    x: usize,
    y: usize,
}

impl Traveler {
    /// Local column every session starts at.
    pub const START_X: usize = CHUNK_WIDTH / 2;
    /// Local row every session starts at.
    pub const START_Y: usize = CHUNK_HEIGHT / 2;

    /// A traveler at the centre of the origin chunk.
    pub fn new() -> Self {
        Self::at(ChunkCoord::ORIGIN, Self::START_X, Self::START_Y)
    }

    /// A traveler at local `(x, y)` of `chunk`.
    pub fn at(chunk: ChunkCoord, x: usize, y: usize) -> Self {
        debug_assert!(x < CHUNK_WIDTH && y < CHUNK_HEIGHT, "({x}, {y}) out of chunk");
        Self { chunk, x, y }
    }

    /// Current position.
    pub fn position(&self) -> TravelerPosition {
        TravelerPosition {
            chunk: self.chunk,
            x: self.x,
            y: self.y,
        }
    }

    /// Current chunk coordinate.
    pub fn chunk(&self) -> ChunkCoord {
        self.chunk
    }

    /// Take one cardinal step.
    pub fn step(&mut self, direction: Direction, world: &mut impl ChunkSource) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.move_by(dx, dy, world)
    }

    /// Move by a cardinal unit offset.
    ///
    /// Stepping past an edge always lands just inside the opposite edge of
    /// the neighbouring chunk without consulting any terrain. Otherwise the
    /// destination in the current chunk is checked and only walls refuse
    /// the move.
    pub fn move_by(&mut self, dx: i64, dy: i64, world: &mut impl ChunkSource) -> MoveOutcome {
        debug_assert!(
            dx.abs() + dy.abs() == 1,
            "move must be a cardinal unit step, got ({dx}, {dy})"
        );

        let new_x = self.x as i64 + dx;
        let new_y = self.y as i64 + dy;

        let crossing = if new_x < 0 {
            Some((-1, 0, CHUNK_WIDTH - 2, self.y))
        } else if new_x >= CHUNK_WIDTH as i64 {
            Some((1, 0, 1, self.y))
        } else if new_y < 0 {
            Some((0, -1, self.x, CHUNK_HEIGHT - 2))
        } else if new_y >= CHUNK_HEIGHT as i64 {
            Some((0, 1, self.x, 1))
        } else {
            None
        };

        if let Some((cdx, cdy, x, y)) = crossing {
            self.chunk = self.chunk.offset(cdx, cdy);
            self.x = x;
            self.y = y;
            trace!(chunk = %self.chunk, x, y, "crossed chunk edge");
            return MoveOutcome::Crossed(self.chunk);
        }

        let (new_x, new_y) = (new_x as usize, new_y as usize);
        if world.chunk(self.chunk).get(new_x, new_y).is_wall() {
            return MoveOutcome::Blocked;
        }
        self.x = new_x;
        self.y = new_y;
        MoveOutcome::Moved
    }
}

impl Default for Traveler {
    fn default() -> Self {
        Self::new()
    }
}
