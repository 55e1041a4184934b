//! Fair piece sequencing with a shuffled bag
//!
//! Generalizes the classic "7-bag" to any piece set: every refill enqueues a
//! uniform permutation of the full id set, so over any window aligned to bag
//! boundaries each piece is drawn exactly once. Lookahead commits future
//! bags into the queue instead of simulating them, which keeps peeking free
//! of side effects on the draw order.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::types::PieceId;

/// Infinite fair sequence of piece ids
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// The full id set, in load order; one bag = one permutation of this
    ids: Vec<PieceId>,
    /// Committed upcoming draws, soonest first
    queue: VecDeque<PieceId>,
    rng: StdRng,
}

impl BagRandomizer {
    /// Entropy-seeded randomizer over the given piece ids
    pub fn new(ids: Vec<PieceId>) -> Self {
        Self::with_rng(ids, StdRng::from_entropy())
    }

    /// Deterministic randomizer for tests and replays
    pub fn from_seed(ids: Vec<PieceId>, seed: u64) -> Self {
        Self::with_rng(ids, StdRng::seed_from_u64(seed))
    }

    fn with_rng(ids: Vec<PieceId>, rng: StdRng) -> Self {
        debug_assert!(!ids.is_empty(), "bag requires at least one piece id");
        Self {
            ids,
            queue: VecDeque::new(),
            rng,
        }
    }

    /// Number of ids per bag
    pub fn bag_size(&self) -> usize {
        self.ids.len()
    }

    /// Draw the next piece id, refilling the bag when it runs dry
    pub fn draw(&mut self) -> PieceId {
        if self.queue.is_empty() {
            self.refill();
        }
        self.queue.pop_front().expect("refill enqueues a full bag")
    }

    /// Look ahead at the next `n` draws without consuming them
    ///
    /// Extends the committed queue across bag boundaries as needed; the ids
    /// returned are exactly what subsequent `draw` calls will produce
    pub fn peek(&mut self, n: usize) -> Vec<PieceId> {
        while self.queue.len() < n {
            self.refill();
        }
        self.queue.iter().take(n).copied().collect()
    }

    fn refill(&mut self) {
        let mut bag = self.ids.clone();
        bag.shuffle(&mut self.rng);
        debug!(?bag, "generated new bag");
        self.queue.extend(bag);
    }
}
