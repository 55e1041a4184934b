//! Core game logic: pure, deterministic, and testable
//!
//! Everything in here runs without UI, I/O, or timers, which makes it:
//!
//! - **Deterministic**: a seeded session replays the exact same game
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: embeddable under any renderer or driver
//!
//! # Module Structure
//!
//! - [`shapes`]: piece masks, rotation precompute, and the shape library
//! - [`bag`]: fair shuffled-bag piece sequencing
//! - [`board`]: the playfield with collision detection and row collapse
//! - [`piece`]: the falling piece and its movement rules
//! - [`scoring`]: score and speed-level functions
//! - [`game_state`]: the session tying all of the above together
//! - [`snapshot`]: read-only views for renderers

pub mod bag;
pub mod board;
pub mod game_state;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use bag::BagRandomizer;
pub use board::Board;
pub use game_state::GameSession;
pub use piece::{ActivePiece, ActivePieceController};
pub use scoring::{clear_score, placement_score, speed_level};
pub use shapes::{standard_pieces, PieceDef, ShapeError, ShapeLibrary, ShapeMask};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
