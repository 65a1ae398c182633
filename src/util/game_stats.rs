//! Simple game statistics, usable to test the move generator.
use internal_iterator::InternalIterator;

use crate::board::LoaBoard;

/// The number of move sequences of length `depth` playable from `board`,
/// including transpositions. See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &LoaBoard, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_done() {
        return 0;
    }

    let mut total = 0;
    board.available_moves().unwrap().for_each(|mv| {
        total += perft(&board.clone_and_play(mv).unwrap(), depth - 1);
    });
    total
}
