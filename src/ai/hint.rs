//! The hint advisor: a three-tier recommendation for the side to move.
//!
//! The tiers are checked in order, first match wins:
//! 1. a move that wins on the spot,
//! 2. if the opponent currently has an immediately winning reply, a move that
//!    eliminates every such reply,
//! 3. the best move by positional score.
//!
//! Tier 2 deliberately re-enumerates the opponent's replies from scratch
//! after each candidate instead of diffing against the pre-move threat set:
//! a candidate that blocks one threat while opening another is not safe.

use std::fmt::{Display, Formatter};

use internal_iterator::InternalIterator;

use crate::ai::greedy;
use crate::board::{LoaBoard, Player};
use crate::mv::Move;

/// Priority class of a [Hint].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HintCategory {
    /// The move wins immediately.
    Win,
    /// The opponent threatened to win next turn, the move prevents all of it.
    Safe,
    /// Nothing urgent, the move is simply the best by positional score.
    Any,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Hint {
    pub mv: Move,
    pub category: HintCategory,
}

impl Display for HintCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HintCategory::Win => write!(f, "win"),
            HintCategory::Safe => write!(f, "safe"),
            HintCategory::Any => write!(f, "any"),
        }
    }
}

/// Recommend a move for `player`. `None` iff the game is over or `player`
/// has no legal move.
pub fn suggest(board: &LoaBoard, player: Player) -> Option<Hint> {
    if board.is_done() {
        return None;
    }

    let moves: Vec<Move> = board.moves_for(player).collect();
    if moves.is_empty() {
        return None;
    }

    // probes run on a scratch copy, the caller's board stays untouched
    let mut scratch = board.clone();
    let opponent = player.other();

    // tier 1: win on the spot
    for &mv in &moves {
        let probe = scratch.scoped_move(mv, player);
        if probe.has_won(player) {
            return Some(Hint {
                mv,
                category: HintCategory::Win,
            });
        }
    }

    // tier 2: the opponent threatens to win, find a move that stops all of it
    if winning_move_exists(&mut scratch, opponent) {
        for &mv in &moves {
            let mut probe = scratch.scoped_move(mv, player);
            let still_threatened = winning_move_exists(&mut *probe, opponent);
            drop(probe);

            if !still_threatened {
                return Some(Hint {
                    mv,
                    category: HintCategory::Safe,
                });
            }
        }
    }

    // tier 3: best positional move
    greedy::choose_move(board, player).map(|mv| Hint {
        mv,
        category: HintCategory::Any,
    })
}

/// Whether `player` has a move that immediately wins, probed transiently.
fn winning_move_exists(board: &mut LoaBoard, player: Player) -> bool {
    let moves: Vec<Move> = board.moves_for(player).collect();
    moves.into_iter().any(|mv| {
        let probe = board.scoped_move(mv, player);
        probe.has_won(player)
    })
}
