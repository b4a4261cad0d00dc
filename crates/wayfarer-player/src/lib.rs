//! Traveler movement across chunk boundaries and the game session that
//! pairs a traveler with its world.

pub mod session;
pub mod traveler;

pub use session::Session;
pub use traveler::{ChunkSource, Direction, MoveOutcome, Traveler, TravelerPosition};
