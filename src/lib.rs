//! Falling-block puzzle engine
//!
//! A pure game core: a fixed-size board, polyomino pieces of arbitrary
//! rectangular bounding shape, a fair shuffled-bag sequencer, and the
//! movement, rotation, placement, and line-clear rules that tie them
//! together. Rendering, input mapping, and asset loading live outside;
//! they drive the session through its command methods and read state back
//! through snapshots.
//!
//! The engine holds no timers and spawns no threads; the caller decides
//! how often to tick it, and every call completes synchronously.
//!
//! # Example
//!
//! ```
//! use catris_core::core::GameSession;
//! use catris_core::types::{GameConfig, MoveOutcome};
//!
//! let config = GameConfig {
//!     seed: Some(7),
//!     ..GameConfig::default()
//! };
//! let mut game = GameSession::standard(config);
//!
//! game.move_left();
//! game.rotate(true);
//! match game.move_down(true) {
//!     MoveOutcome::Placed { .. } => {}
//!     outcome => panic!("first drop cannot end the game: {outcome:?}"),
//! }
//! assert!(game.score() > 0);
//! ```

pub mod core;
pub mod types;
