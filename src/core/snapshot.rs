//! Read-only views handed to external renderers

use crate::core::piece::ActivePiece;
use crate::types::{Cell, PieceId, Rotation};

/// Snapshot of the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub id: PieceId,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            id: value.id,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Full session view: one coherent frame for a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major occupancy; `Some(id)` is a settled cell of that piece
    pub cells: Vec<Cell>,
    pub active: ActiveSnapshot,
    /// Rows the active piece can still fall (ghost preview)
    pub ghost_offset: i32,
    /// Upcoming piece ids, soonest first
    pub next: Vec<PieceId>,
    pub score: u32,
    pub highscore: u32,
    pub kills: u32,
    pub speed: u32,
}

impl GameSnapshot {
    /// Occupancy of a board cell; None when out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(self.cells[(y * self.width + x) as usize])
    }
}
