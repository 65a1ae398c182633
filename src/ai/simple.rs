//! A trivial baseline bot.
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use rand::Rng;

use crate::ai::Bot;
use crate::board::LoaBoard;
use crate::mv::Move;

/// Bot that chooses moves randomly uniformly among the available moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &LoaBoard) -> Option<Move> {
        if board.is_done() {
            return None;
        }

        let player = board.next_player();
        let count = board.moves_for(player).count();
        if count == 0 {
            return None;
        }

        let index = self.rng.gen_range(0..count);
        board.moves_for(player).nth(index)
    }
}
