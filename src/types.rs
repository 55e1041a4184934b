//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Stable identifier of a loaded piece definition
pub type PieceId = u32;

/// Cell on the board (None = empty, Some = filled by that piece)
pub type Cell = Option<PieceId>;

/// Default playfield dimensions (columns x rows)
pub const DEFAULT_BOARD_WIDTH: i32 = 13;
pub const DEFAULT_BOARD_HEIGHT: i32 = 26;

/// Rotation states in 90 degree clockwise steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All rotation states in clockwise order
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Index into [`Rotation::ALL`]
    pub fn index(self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Rotate clockwise (one 90 degree step)
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg0,
        }
    }

    /// Step by a signed number of 90 degree increments, modulo 4
    pub fn stepped(self, steps: i32) -> Self {
        let idx = (self.index() as i32 + steps).rem_euclid(4) as usize;
        Self::ALL[idx]
    }
}

/// Result of a down-move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece fell one row and is still falling
    Moved,
    /// The piece settled; `cleared` full rows were removed
    Placed { cleared: usize },
    /// The fresh spawn collided: the field and counters were reset
    GameOver,
}

/// Session construction parameters
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Board width in columns
    pub width: i32,
    /// Board height in rows
    pub height: i32,
    /// Bag RNG seed; None draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: None,
        }
    }
}
