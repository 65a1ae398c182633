//! Positional evaluation: compactness and connectivity, the two ingredients
//! of the win condition.

use itertools::{Itertools, MinMaxResult};

use crate::board::{LoaBoard, Player};
use crate::mv::Move;
use crate::util::bitboard::BitBoard8;
use crate::util::coord::Coord;

/// How much heavier a disconnected group weighs than one square of spread.
pub const GROUP_WEIGHT: f32 = 5.0;

/// Score of the current position for `player`, higher is better.
///
/// `-(bounding box spread) - GROUP_WEIGHT * connected_groups`, where spread is
/// `(max row - min row) + (max col - min col)` over the player's pieces.
/// A side with no pieces scores negative infinity, so a maximizing search
/// never prefers a position in which it got wiped out.
pub fn score(board: &LoaBoard, player: Player) -> f32 {
    let tiles = board.tiles(player);
    if tiles.none() {
        return f32::NEG_INFINITY;
    }

    let spread = axis_spread(tiles, Coord::row) + axis_spread(tiles, Coord::col);
    let groups = board.connected_groups(player);

    -(spread as f32) - GROUP_WEIGHT * groups as f32
}

fn axis_spread(tiles: BitBoard8, axis: fn(Coord) -> u8) -> u8 {
    match tiles.into_iter().map(axis).minmax() {
        // the caller already handled the empty mask
        MinMaxResult::NoElements => unreachable!(),
        MinMaxResult::OneElement(_) => 0,
        MinMaxResult::MinMax(min, max) => max - min,
    }
}

/// Score of the position that results from `player` playing `mv`, probed
/// through a scoped move so the board is bit-for-bit unchanged afterwards.
pub fn evaluate_move(board: &mut LoaBoard, mv: Move, player: Player) -> f32 {
    let probe = board.scoped_move(mv, player);
    score(&probe, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_symmetric() {
        let board = LoaBoard::default();

        // both sides: spread 7 + 5 = 12, two groups of six
        let expected = -12.0 - 2.0 * GROUP_WEIGHT;
        assert_eq!(score(&board, Player::Black), expected);
        assert_eq!(score(&board, Player::White), expected);
    }

    #[test]
    fn empty_side_scores_neg_infinity() {
        let board = LoaBoard::from_fen("8/8/8/8/8/8/8/ooo5 x").unwrap();
        assert_eq!(score(&board, Player::Black), f32::NEG_INFINITY);
        assert!(score(&board, Player::White) > f32::NEG_INFINITY);
    }

    #[test]
    fn connecting_scores_higher() {
        // black pair plus a loose piece on the same row
        let board = LoaBoard::from_fen("xx3x2/8/8/8/8/8/8/o5o1 x").unwrap();
        let mut board = board;

        // three pieces on row 0, so f8 travels three squares west to c8
        let connect = Move {
            from: Coord::from_rc(0, 5),
            to: Coord::from_rc(0, 2),
        };
        let drift = Move {
            from: Coord::from_rc(0, 5),
            to: Coord::from_rc(1, 5),
        };
        assert_eq!(board.is_available_move(connect), Ok(true));
        assert_eq!(board.is_available_move(drift), Ok(true));

        let connected = evaluate_move(&mut board, connect, Player::Black);
        let drifted = evaluate_move(&mut board, drift, Player::Black);
        assert!(
            connected > drifted,
            "connecting ({}) should beat drifting ({})",
            connected,
            drifted
        );
    }

    #[test]
    fn evaluate_move_leaves_board_unchanged() {
        let mut board = LoaBoard::default();
        let before = board.clone();
        let mv = Move {
            from: Coord::from_rc(0, 1),
            to: Coord::from_rc(2, 1),
        };
        evaluate_move(&mut board, mv, Player::Black);
        assert_eq!(board, before);
    }
}
