//! Scoped transient moves, used by search to probe hypothetical positions.
//!
//! A probe is a pair of cell writes (destination becomes the mover, origin
//! becomes empty) that has to be undone before the board is trusted again.
//! Instead of relying on the caller to pair the calls by hand, the writes are
//! captured in a [MoveGuard] that restores the exact prior cells when it goes
//! out of scope, on every exit path. Guards nest: the guard derefs to the
//! board, so a deeper probe borrows from the shallower one and the borrow
//! checker forces the inner guard to be dropped first (stack discipline).

use std::ops::{Deref, DerefMut};

use crate::board::{LoaBoard, Player};
use crate::mv::Move;

/// A transient move in flight. Dropping it restores the board.
#[derive(Debug)]
pub struct MoveGuard<'a> {
    board: &'a mut LoaBoard,
    mv: Move,
    player: Player,
    captured: Option<Player>,
}

impl LoaBoard {
    /// Apply `mv` for `player` on the piece masks only; turn and winner are
    /// untouched. The returned guard restores the two cells when dropped.
    ///
    /// Precondition: `player` occupies `mv.from`.
    pub fn scoped_move(&mut self, mv: Move, player: Player) -> MoveGuard<'_> {
        debug_assert_eq!(self.tile(mv.from), Some(player), "mover does not occupy {:?}", mv.from);

        let captured = self.force_move_cells(mv, player);
        MoveGuard {
            board: self,
            mv,
            player,
            captured,
        }
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.restore_move_cells(self.mv, self.player, self.captured);
    }
}

impl Deref for MoveGuard<'_> {
    type Target = LoaBoard;

    fn deref(&self) -> &LoaBoard {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut LoaBoard {
        self.board
    }
}
