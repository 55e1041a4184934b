//! Session orchestration: spawning, placement, scoring, game over
//!
//! One `GameSession` owns the board, the bag, the shape library, and the
//! active piece; nothing is shared or global. The caller drives it one
//! command per tick and reads state back through the accessors or an
//! aggregate snapshot.

use tracing::info;

use crate::core::bag::BagRandomizer;
use crate::core::board::Board;
use crate::core::piece::{ActivePiece, ActivePieceController};
use crate::core::scoring::{placement_score, speed_level};
use crate::core::shapes::{standard_pieces, ShapeLibrary, ShapeMask};
use crate::core::snapshot::GameSnapshot;
use crate::types::{GameConfig, MoveOutcome, PieceId};

/// One complete game: board, bag, active piece, and counters
#[derive(Debug, Clone)]
pub struct GameSession {
    shapes: ShapeLibrary,
    bag: BagRandomizer,
    board: Board,
    active: ActivePieceController,
    score: u32,
    highscore: u32,
    kills: u32,
    speed: u32,
}

impl GameSession {
    /// Build a session over a loaded piece set
    ///
    /// Piece-set validation happens in [`ShapeLibrary::load`]; construction
    /// here cannot fail
    pub fn new(shapes: ShapeLibrary, config: GameConfig) -> Self {
        let ids: Vec<PieceId> = shapes.ids().collect();
        let mut bag = match config.seed {
            Some(seed) => BagRandomizer::from_seed(ids, seed),
            None => BagRandomizer::new(ids),
        };
        let board = Board::new(config.width, config.height);
        let first = bag.draw();
        let active = ActivePieceController::new(first, &shapes, &board);

        Self {
            shapes,
            bag,
            board,
            active,
            score: 0,
            highscore: 0,
            kills: 0,
            speed: 0,
        }
    }

    /// Session over the built-in seven-piece set
    pub fn standard(config: GameConfig) -> Self {
        let shapes = ShapeLibrary::load(standard_pieces()).expect("built-in piece set is valid");
        Self::new(shapes, config)
    }

    /// Move the active piece one column left; false = blocked
    pub fn move_left(&mut self) -> bool {
        self.active.try_move_left(&self.shapes, &self.board)
    }

    /// Move the active piece one column right; false = blocked
    pub fn move_right(&mut self) -> bool {
        self.active.try_move_right(&self.shapes, &self.board)
    }

    /// Rotate the active piece; Some(applied offset) on success
    pub fn rotate(&mut self, clockwise: bool) -> Option<(i32, i32)> {
        self.active.try_rotate(clockwise, &self.shapes, &self.board)
    }

    /// Advance the active piece downward
    ///
    /// With `all_the_way` the piece drops to its landing position and always
    /// places this call; otherwise one free row down returns `Moved`. A
    /// resting piece is placed: full rows collapse, the placement scores,
    /// and the next bag draw spawns. If that spawn collides the game is
    /// over: the field and counters reset (the highscore survives), a fresh
    /// piece spawns, and `GameOver` is returned.
    pub fn move_down(&mut self, all_the_way: bool) -> MoveOutcome {
        if all_the_way {
            self.active.hard_drop(&self.shapes, &self.board);
        } else if self.active.try_move_down(&self.shapes, &self.board) {
            return MoveOutcome::Moved;
        }

        let piece = self.active.piece();
        let shape = self.shapes.rotated(piece.id, piece.rotation);
        self.board.place(shape, piece.x, piece.y, piece.id);
        let cleared = self.board.collapse_full_rows();

        let next = self.bag.draw();
        self.active.spawn(next, &self.shapes, &self.board);

        if !self.active.in_free_position(&self.shapes, &self.board) {
            info!(score = self.score, kills = self.kills, "game over");
            self.reset();
            return MoveOutcome::GameOver;
        }

        self.score += placement_score(cleared);
        if self.score > self.highscore {
            self.highscore = self.score;
        }
        self.kills += cleared as u32;
        self.speed = speed_level(self.kills);

        MoveOutcome::Placed { cleared }
    }

    /// Clear the field and counters and start a fresh game
    ///
    /// The highscore survives
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.kills = 0;
        self.speed = 0;
        let next = self.bag.draw();
        self.active.spawn(next, &self.shapes, &self.board);
    }

    /// The playfield
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The loaded piece set
    pub fn shapes(&self) -> &ShapeLibrary {
        &self.shapes
    }

    /// The committed active-piece state
    pub fn active_piece(&self) -> ActivePiece {
        self.active.piece()
    }

    /// The active piece's shape at its current rotation
    pub fn active_shape(&self) -> &ShapeMask {
        let piece = self.active.piece();
        self.shapes.rotated(piece.id, piece.rotation)
    }

    /// Rows the active piece can still fall, for ghost rendering
    pub fn landing_offset(&self) -> i32 {
        self.active.landing_offset(&self.shapes, &self.board)
    }

    /// The next `n` piece ids, soonest first
    pub fn preview(&mut self, n: usize) -> Vec<PieceId> {
        self.bag.peek(n)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    /// Total rows cleared this game
    pub fn kills(&self) -> u32 {
        self.kills
    }

    /// Speed level, one step per ten cleared rows
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// One coherent read-only view for renderers, with an `n`-piece lookahead
    pub fn snapshot(&mut self, preview: usize) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells: self.board.cells().to_vec(),
            active: self.active.piece().into(),
            ghost_offset: self.landing_offset(),
            next: self.bag.peek(preview),
            score: self.score,
            highscore: self.highscore,
            kills: self.kills,
            speed: self.speed,
        }
    }
}
