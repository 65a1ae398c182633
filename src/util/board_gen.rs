//! Utilities to construct a [LoaBoard] in a known or random state.
use internal_iterator::InternalIterator;
use rand::Rng;

use crate::board::LoaBoard;
use crate::mv::Move;

/// Play the given moves, starting from `start`.
pub fn board_with_moves(start: LoaBoard, moves: &[Move]) -> LoaBoard {
    let mut curr = start;
    for &mv in moves {
        assert!(!curr.is_done(), "Board already done, playing {} on {:?}", mv, curr);
        assert_eq!(
            curr.is_available_move(mv),
            Ok(true),
            "Move not available, playing {} on {:?}",
            mv,
            curr
        );
        curr.play(mv).unwrap();
    }
    curr
}

/// Generate a board by playing `n` random moves on `start`.
/// Restarts from scratch whenever the game ends (or a side gets stuck) early.
pub fn random_board_with_moves(start: &LoaBoard, n: u32, rng: &mut impl Rng) -> LoaBoard {
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            let mv = match random_move(&board, rng) {
                Some(mv) => mv,
                None => continue 'new_try,
            };
            board.play(mv).unwrap();
        }
        return board;
    }
}

/// A uniformly random move for the side to move,
/// `None` when the game is over or the side has no legal move.
pub fn random_move(board: &LoaBoard, rng: &mut impl Rng) -> Option<Move> {
    if board.is_done() {
        return None;
    }

    let player = board.next_player();
    let count = board.moves_for(player).count();
    if count == 0 {
        return None;
    }

    let index = rng.gen_range(0..count);
    board.moves_for(player).nth(index)
}
