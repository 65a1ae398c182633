//! Text notation: squares, moves and FEN-style positions.
//!
//! Squares are written `<file><rank>` with file `a`-`h` for columns 0-7 and
//! rank `8 - row`, so rank 8 is the top of the board. A position is written
//! as 8 rows top-down separated by `/`, `x` for black, `o` for white and
//! digit runs for empty squares, followed by the side to move:
//! the starting position is `1xxxxxx1/o6o/o6o/o6o/o6o/o6o/o6o/1xxxxxx1 x`.

use std::fmt::{Debug, Display, Formatter, Write};

use itertools::Itertools;

use crate::board::{LoaBoard, Player};
use crate::mv::Move;
use crate::util::coord::Coord;

pub fn coord_to_uli(coord: Coord) -> String {
    format!("{}{}", (b'a' + coord.col()) as char, 8 - coord.row())
}

pub fn coord_from_uli(s: &str) -> Result<Coord, InvalidUliMove> {
    let err = || InvalidUliMove(s.to_owned());

    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err(err());
    }

    let col = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'0');
    if col >= 8 || !(1..=8).contains(&rank) {
        return Err(err());
    }

    Ok(Coord::from_rc(8 - rank, col))
}

#[derive(Debug, Eq, PartialEq)]
pub struct InvalidUliMove(pub String);

impl Move {
    pub fn to_uli(self) -> String {
        format!("{}{}", coord_to_uli(self.from), coord_to_uli(self.to))
    }

    pub fn from_uli(s: &str) -> Result<Move, InvalidUliMove> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(InvalidUliMove(s.to_owned()));
        }
        let from = coord_from_uli(&s[..2]).map_err(|_| InvalidUliMove(s.to_owned()))?;
        let to = coord_from_uli(&s[2..]).map_err(|_| InvalidUliMove(s.to_owned()))?;
        Ok(Move { from, to })
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", coord_to_uli(*self))
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", coord_to_uli(*self))
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_uli())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_uli())
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InvalidLoaFen {
    pub fen: String,
    pub reason: &'static str,
}

impl LoaBoard {
    /// Parse a position. A loaded position is never terminal, even when a
    /// side already forms a single group: win detection only runs when a
    /// move is committed, like in play.
    pub fn from_fen(fen: &str) -> Result<LoaBoard, InvalidLoaFen> {
        let err = |reason| InvalidLoaFen {
            fen: fen.into(),
            reason,
        };

        let blocks = fen.split(' ').collect_vec();
        let [board_str, next_str] = match &*blocks {
            &[a, b] => [a, b],
            _ => return Err(err("Expected exactly 2 components")),
        };

        let rows = board_str.split('/').collect_vec();
        if rows.len() != 8 {
            return Err(err("Expected exactly 8 rows"));
        }

        let mut board = LoaBoard::empty();
        for (row, &line) in rows.iter().enumerate() {
            let mut col = 0;

            for c in line.chars() {
                if col >= 8 {
                    return Err(err("Too many columns in row"));
                }

                let coord = Coord::from_rc(row as u8, col as u8);
                match c {
                    'x' => board.set_tile(coord, Some(Player::Black)),
                    'o' => board.set_tile(coord, Some(Player::White)),
                    d if d.is_ascii_digit() => {
                        col += d.to_digit(10).unwrap() as usize;
                        continue;
                    }
                    _ => return Err(err("Invalid character in board")),
                }

                col += 1;
            }

            if col != 8 {
                return Err(err("Too few columns in row"));
            }
        }

        board.next_player = match next_str {
            "x" => Player::Black,
            "o" => Player::White,
            _ => return Err(err("Invalid next player")),
        };

        board.assert_valid();

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut s = String::new();

        for row in 0..8 {
            if row != 0 {
                write!(&mut s, "/").unwrap();
            }

            let mut empty_count = 0;

            for col in 0..8 {
                let coord = Coord::from_rc(row, col);

                match self.tile(coord) {
                    None => empty_count += 1,
                    Some(player) => {
                        if empty_count != 0 {
                            write!(&mut s, "{}", empty_count).unwrap();
                            empty_count = 0;
                        }
                        write!(&mut s, "{}", player.to_char()).unwrap();
                    }
                }
            }

            if empty_count != 0 {
                write!(&mut s, "{}", empty_count).unwrap();
            }
        }

        write!(&mut s, " {}", self.next_player.to_char()).unwrap();

        s
    }
}

impl Debug for LoaBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoaBoard(\"{}\"", self.to_fen())?;
        if let Some(winner) = self.winner() {
            write!(f, ", won by {}", winner)?;
        }
        write!(f, ")")
    }
}

impl Display for LoaBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FEN: {}", self.to_fen())?;

        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;

            for col in 0..8 {
                let coord = Coord::from_rc(row, col);
                let c = match self.tile(coord) {
                    None => '.',
                    Some(player) => player.to_char(),
                };
                write!(f, "{}", c)?;
            }

            if row == 3 {
                match self.winner() {
                    Some(winner) => write!(f, "    {} won", winner.to_char())?,
                    None => write!(f, "    {} to move", self.next_player.to_char())?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for col in 0..8 {
            write!(f, "{}", (b'a' + col) as char)?;
        }
        writeln!(f)?;

        Ok(())
    }
}
