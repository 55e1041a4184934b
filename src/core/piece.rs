//! The actively falling piece and its movement rules
//!
//! The controller owns only the piece itself; the board is never mutated
//! here. Every candidate move is validated through `Board::can_place`, and
//! the committed state is always a collision-free placement.

use tracing::debug;

use crate::core::board::Board;
use crate::core::shapes::ShapeLibrary;
use crate::types::{PieceId, Rotation};

/// The falling piece: which definition, at which rotation, where
///
/// (x, y) addresses the top-left cell of the shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub id: PieceId,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

/// Drives the active piece against a board via collision queries
#[derive(Debug, Clone)]
pub struct ActivePieceController {
    piece: ActivePiece,
}

impl ActivePieceController {
    /// Create the controller with an initial spawn
    pub fn new(id: PieceId, shapes: &ShapeLibrary, board: &Board) -> Self {
        let mut controller = Self {
            piece: ActivePiece {
                id,
                rotation: Rotation::Deg0,
                x: 0,
                y: 0,
            },
        };
        controller.spawn(id, shapes, board);
        controller
    }

    /// Replace the piece with a fresh spawn: rotation 0, top row, centered
    ///
    /// Does not test for collision; the session checks the spawn position
    /// and signals game over
    pub fn spawn(&mut self, id: PieceId, shapes: &ShapeLibrary, board: &Board) {
        let width = shapes.rotated(id, Rotation::Deg0).width();
        self.piece = ActivePiece {
            id,
            rotation: Rotation::Deg0,
            x: board.width() / 2 - width / 2,
            y: 0,
        };
    }

    /// The committed piece state
    pub fn piece(&self) -> ActivePiece {
        self.piece
    }

    /// Whether the piece fits at an offset and rotation-step relative to its
    /// committed state
    fn fits(&self, dx: i32, dy: i32, steps: i32, shapes: &ShapeLibrary, board: &Board) -> bool {
        let rotation = self.piece.rotation.stepped(steps);
        let shape = shapes.rotated(self.piece.id, rotation);
        board.can_place(shape, self.piece.x + dx, self.piece.y + dy)
    }

    /// Whether the committed position itself is collision-free
    pub fn in_free_position(&self, shapes: &ShapeLibrary, board: &Board) -> bool {
        self.fits(0, 0, 0, shapes, board)
    }

    /// Try to move one column left; false = blocked, piece unchanged
    pub fn try_move_left(&mut self, shapes: &ShapeLibrary, board: &Board) -> bool {
        self.try_shift(-1, shapes, board)
    }

    /// Try to move one column right; false = blocked, piece unchanged
    pub fn try_move_right(&mut self, shapes: &ShapeLibrary, board: &Board) -> bool {
        self.try_shift(1, shapes, board)
    }

    fn try_shift(&mut self, dx: i32, shapes: &ShapeLibrary, board: &Board) -> bool {
        if self.fits(dx, 0, 0, shapes, board) {
            self.piece.x += dx;
            true
        } else {
            false
        }
    }

    /// Try to fall one row; false = resting on something
    pub fn try_move_down(&mut self, shapes: &ShapeLibrary, board: &Board) -> bool {
        if self.fits(0, 1, 0, shapes, board) {
            self.piece.y += 1;
            true
        } else {
            false
        }
    }

    /// Attempt a 90 degree rotation
    ///
    /// The target position re-centers on the bounding-box change between the
    /// old and new shape (half the width/height delta, truncated), then the
    /// offset is clamped back inside the board on every violated edge.
    /// Exactly that one candidate is tried; if it collides the rotation is
    /// rejected wholesale and the piece is unchanged. Returns the applied
    /// (dx, dy) on success.
    pub fn try_rotate(
        &mut self,
        clockwise: bool,
        shapes: &ShapeLibrary,
        board: &Board,
    ) -> Option<(i32, i32)> {
        let steps = if clockwise { 1 } else { -1 };
        let old_shape = shapes.rotated(self.piece.id, self.piece.rotation);
        let new_rotation = self.piece.rotation.stepped(steps);
        let new_shape = shapes.rotated(self.piece.id, new_rotation);

        // rotate around the center of the bounding box
        let mut move_x = -((new_shape.width() - old_shape.width()) / 2);
        let mut move_y = -((new_shape.height() - old_shape.height()) / 2);

        // push the candidate back inside the board
        let new_x = self.piece.x + move_x;
        let new_y = self.piece.y + move_y;
        if new_x < 0 {
            move_x += -new_x;
        }
        if new_y < 0 {
            move_y += -new_y;
        }
        if new_x + new_shape.width() > board.width() {
            move_x -= new_x + new_shape.width() - board.width();
        }
        if new_y + new_shape.height() > board.height() {
            move_y -= new_y + new_shape.height() - board.height();
        }

        if !self.fits(move_x, move_y, steps, shapes, board) {
            debug!(piece = self.piece.id, "rotation blocked");
            return None;
        }

        self.piece.x += move_x;
        self.piece.y += move_y;
        self.piece.rotation = new_rotation;
        Some((move_x, move_y))
    }

    /// Rows the piece can still fall before resting (0 = already resting)
    ///
    /// Pure query; probes straight down with `can_place`
    pub fn landing_offset(&self, shapes: &ShapeLibrary, board: &Board) -> i32 {
        let mut dy = 0;
        while self.fits(0, dy + 1, 0, shapes, board) {
            dy += 1;
        }
        dy
    }

    /// Drop to the landing position
    pub fn hard_drop(&mut self, shapes: &ShapeLibrary, board: &Board) {
        self.piece.y += self.landing_offset(shapes, board);
    }
}
