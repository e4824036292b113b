//! Computer opponents.

use crate::{Board, Position};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Anything that can pick a cell for the computer side.
pub trait Opponent {
    /// Picks an empty cell on `board`, or `None` if none is left.
    fn choose(&mut self, board: &Board) -> Option<Position>;
}

/// Opponent that picks uniformly among the currently empty cells.
///
/// Sampling draws directly from the empty cells, so a nearly full board
/// costs the same as an empty one.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates an opponent seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an opponent with a fixed seed for reproducible games.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Opponent for RandomOpponent {
    #[instrument(skip_all, fields(empty = board.empty_count()))]
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let choice = board.empty_cells().choose(&mut self.rng);
        debug!(?choice, "Opponent picked a cell");
        choice
    }
}
