use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::{LoaBoard, Player};
use crate::mv::Move;
use crate::util::coord::Coord;

/// The eight compass directions, in the fixed order move generation scans
/// them. The order is part of the contract: bots break score ties by taking
/// the first move encountered, so it has to stay stable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    East,
    South,
    SouthEast,
    North,
    West,
    NorthWest,
    NorthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::South,
        Direction::SouthEast,
        Direction::North,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// `(row delta, col delta)` of a single step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

impl LoaBoard {
    /// The number of occupied squares (of either color) anywhere on the full
    /// line through `coord` along `dir`, the origin square included. This is
    /// the exact distance a piece on `coord` travels in that direction.
    pub fn line_count(&self, coord: Coord, dir: Direction) -> u8 {
        let occupied = self.occupied();
        let mut count = 0;

        // backward half-line, origin excluded
        let mut curr = coord.step_back(dir);
        while let Some(c) = curr {
            if occupied.has(c) {
                count += 1;
            }
            curr = c.step_back(dir);
        }

        // forward half-line, origin included
        let mut curr = Some(coord);
        while let Some(c) = curr {
            if occupied.has(c) {
                count += 1;
            }
            curr = c.step(dir);
        }

        count
    }

    /// The square reached from `coord` by travelling [LoaBoard::line_count]
    /// steps along `dir`, `None` when that leaves the board.
    fn line_target(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let dist = self.line_count(coord, dir);
        let mut curr = coord;
        for _ in 0..dist {
            curr = curr.step(dir)?;
        }
        Some(curr)
    }

    /// Legal destinations of the piece on `from`, in direction order. Each
    /// direction yields at most one destination: the travelled square, if it
    /// is on the board and not blocked by a piece of the mover's own color.
    /// Landing on an opposing piece is a capture.
    ///
    /// Panics if `from` is empty. Whether the piece belongs to the side to
    /// move is the caller's concern; see [LoaBoard::available_moves] for the
    /// turn-checked enumeration.
    pub fn destinations_from(&self, from: Coord) -> impl Iterator<Item = Coord> + '_ {
        let mover = match self.tile(from) {
            Some(player) => player,
            None => panic!("no piece to move on {:?}", from),
        };
        let own = self.tiles(mover);

        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.line_target(from, dir).filter(|&to| !own.has(to)))
    }

    /// All moves for one side, regardless of whose turn it is, enumerated by
    /// increasing square index (row-major) and then by direction order.
    pub fn moves_for(&self, player: Player) -> PlayerMovesIterator {
        PlayerMovesIterator { board: self, player }
    }
}

/// See [LoaBoard::moves_for].
#[derive(Debug)]
pub struct PlayerMovesIterator<'a> {
    board: &'a LoaBoard,
    player: Player,
}

impl InternalIterator for PlayerMovesIterator<'_> {
    type Item = Move;

    fn try_for_each<R, F: FnMut(Self::Item) -> ControlFlow<R>>(self, mut f: F) -> ControlFlow<R> {
        for from in self.board.tiles(self.player) {
            for to in self.board.destinations_from(from) {
                f(Move { from, to })?;
            }
        }
        ControlFlow::Continue(())
    }
}
