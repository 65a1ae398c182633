use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::{LoaBoard, Player};
use crate::heuristic::evaluate_move;
use crate::mv::Move;

/// One-ply greedy bot: scores every move of the side to move with
/// [evaluate_move] and plays the strictly best one. Ties go to the first move
/// in enumeration order, so its choice is deterministic.
#[derive(Debug)]
pub struct GreedyBot;

impl GreedyBot {
    pub fn new() -> Self {
        GreedyBot
    }
}

impl Bot for GreedyBot {
    fn select_move(&mut self, board: &LoaBoard) -> Option<Move> {
        if board.is_done() {
            return None;
        }
        choose_move(board, board.next_player())
    }
}

/// The greedy move for `player`, `None` iff the side has no legal move.
pub fn choose_move(board: &LoaBoard, player: Player) -> Option<Move> {
    let moves: Vec<Move> = board.moves_for(player).collect();

    // probe moves on a scratch copy, the caller's board stays untouched
    let mut scratch = board.clone();
    let mut best: Option<(Move, f32)> = None;

    for mv in moves {
        let value = evaluate_move(&mut scratch, mv, player);
        let better = match best {
            None => true,
            Some((_, best_value)) => value > best_value,
        };
        if better {
            best = Some((mv, value));
        }
    }

    best.map(|(mv, _)| mv)
}
