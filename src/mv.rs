use crate::util::coord::Coord;

/// Relocation of a single piece. A capture is implicit: landing on an
/// opposing piece removes it from the board.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}
