//! The selection/turn state machine a front-end drives.
//!
//! A front-end feeds square activations into [Session::touch] and commits the
//! staged move once its own animation is done. All transitions are pure state
//! changes on the session; nothing here renders or schedules anything.

use crate::ai::hint::{suggest, Hint};
use crate::board::{LoaBoard, Player};
use crate::mv::Move;
use crate::util::coord::Coord;

/// Where a session is in its selection/turn cycle.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for the side to move to pick one of their pieces.
    AwaitingSelection,
    /// A piece is selected, waiting for a destination.
    PieceSelected { from: Coord },
    /// A legal move is staged; the front-end animates it and then calls
    /// [Session::commit_pending].
    MovePending { mv: Move },
    GameOver { winner: Player },
}

/// What a [Session::touch] transition did, so the front-end can update its
/// display without reaching into board internals.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Touched {
    /// An own piece was selected; `destinations` is what to highlight.
    Selected { from: Coord, destinations: Vec<Coord> },
    /// A staged move is now pending.
    Staged { mv: Move },
    /// The selection was dropped.
    Cleared,
    /// The activation meant nothing in the current phase.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: LoaBoard,
    phase: Phase,
}

impl Session {
    pub fn new() -> Session {
        Session::with_board(LoaBoard::default())
    }

    pub fn with_board(board: LoaBoard) -> Session {
        let phase = match board.winner() {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::AwaitingSelection,
        };
        Session { board, phase }
    }

    pub fn board(&self) -> &LoaBoard {
        &self.board
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Feed one square activation into the machine.
    ///
    /// Selecting any piece of the side to move (re)selects it. With a piece
    /// selected, activating one of its legal destinations stages the move;
    /// anything else clears the selection. Activations are ignored while a
    /// move is pending or after the game ended.
    pub fn touch(&mut self, coord: Coord) -> Touched {
        if matches!(self.phase, Phase::GameOver { .. } | Phase::MovePending { .. }) {
            return Touched::Ignored;
        }

        if self.board.tile(coord) == Some(self.board.next_player()) {
            let destinations: Vec<Coord> = self.board.destinations_from(coord).collect();
            self.phase = Phase::PieceSelected { from: coord };
            return Touched::Selected {
                from: coord,
                destinations,
            };
        }

        if let Phase::PieceSelected { from } = self.phase {
            let mv = Move { from, to: coord };
            if self.board.destinations_from(from).any(|to| to == coord) {
                self.phase = Phase::MovePending { mv };
                return Touched::Staged { mv };
            }
            self.phase = Phase::AwaitingSelection;
            return Touched::Cleared;
        }

        Touched::Ignored
    }

    /// Commit the pending move. Panics if no move is pending.
    pub fn commit_pending(&mut self) {
        let mv = match self.phase {
            Phase::MovePending { mv } => mv,
            _ => panic!("commit_pending called in phase {:?}", self.phase),
        };

        // the staged move was validated by `touch` and the board cannot have
        // changed since, the session owns it
        self.board.play(mv).unwrap();

        self.phase = match self.board.winner() {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::AwaitingSelection,
        };
    }

    /// A recommendation for the side to move, see [suggest].
    pub fn hint(&self) -> Option<Hint> {
        suggest(&self.board, self.board.next_player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::hint::HintCategory;

    fn rc(row: u8, col: u8) -> Coord {
        Coord::from_rc(row, col)
    }

    #[test]
    fn select_stage_commit() {
        let mut session = Session::new();

        let touched = session.touch(rc(0, 1));
        match touched {
            Touched::Selected { from, destinations } => {
                assert_eq!(from, rc(0, 1));
                assert_eq!(destinations, vec![rc(0, 7), rc(2, 1), rc(2, 3)]);
            }
            other => panic!("expected selection, got {:?}", other),
        }

        assert_eq!(session.touch(rc(2, 1)), Touched::Staged {
            mv: Move { from: rc(0, 1), to: rc(2, 1) },
        });

        // activations are ignored while the move is pending
        assert_eq!(session.touch(rc(4, 4)), Touched::Ignored);

        session.commit_pending();
        assert_eq!(session.board().tile(rc(2, 1)), Some(Player::Black));
        assert_eq!(session.board().next_player(), Player::White);
        assert_eq!(*session.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn reselect_and_clear() {
        let mut session = Session::new();

        session.touch(rc(0, 1));
        // selecting another own piece replaces the selection
        match session.touch(rc(0, 2)) {
            Touched::Selected { from, .. } => assert_eq!(from, rc(0, 2)),
            other => panic!("expected reselection, got {:?}", other),
        }

        // an illegal destination clears the selection
        assert_eq!(session.touch(rc(4, 4)), Touched::Cleared);
        assert_eq!(*session.phase(), Phase::AwaitingSelection);

        // with nothing selected, an empty square does nothing
        assert_eq!(session.touch(rc(4, 4)), Touched::Ignored);
    }

    #[test]
    fn game_over_locks_the_session() {
        let board = LoaBoard::from_fen("xx3x2/8/8/8/8/8/8/o4o2 x").unwrap();
        let mut session = Session::with_board(board);

        // black connects everything by moving f8 three squares west
        session.touch(rc(0, 5));
        session.touch(rc(0, 2));
        session.commit_pending();

        assert_eq!(*session.phase(), Phase::GameOver { winner: Player::Black });
        assert_eq!(session.touch(rc(0, 2)), Touched::Ignored);
        assert_eq!(session.hint(), None);
    }

    #[test]
    fn hint_matches_advisor() {
        let session = Session::new();
        let hint = session.hint().unwrap();
        assert_eq!(hint.category, HintCategory::Any);
    }
}
