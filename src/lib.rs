#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A rules engine for [Lines of Action](https://en.wikipedia.org/wiki/Lines_of_Action)
//! on an 8x8 board: a piece moves along a straight line exactly as many
//! squares as there are pieces (of either color) anywhere on that line,
//! captures by landing on an opposing piece, and a player wins by gathering
//! all of their pieces into a single 8-connected group.
//!
//! On top of the rules the crate provides:
//! * [GreedyBot](crate::ai::greedy::GreedyBot), a one-ply computer opponent
//!   driven by the positional [heuristic](crate::heuristic),
//! * a three-tier [hint advisor](crate::ai::hint::suggest)
//!   (win now / escape the opponent's win / best positional move),
//! * a [Session](crate::session::Session) state machine for front-ends,
//! * the line-based [ULI protocol](crate::interface::uli) and a small
//!   terminal front-end (`cargo run` starts a game against the bot).
//!
//! # Examples
//!
//! ## List the available moves and play one
//!
//! ```
//! use internal_iterator::InternalIterator;
//! use loa::board::LoaBoard;
//!
//! let mut board = LoaBoard::default();
//! println!("{}", board);
//!
//! board.available_moves().unwrap().for_each(|mv| {
//!     println!("{}", mv);
//! });
//!
//! let mv = board.available_moves().unwrap().next().unwrap();
//! board.play(mv).unwrap();
//! println!("{}", board);
//! ```
//!
//! ## Ask the bot and the advisor
//!
//! ```
//! use loa::ai::greedy::GreedyBot;
//! use loa::ai::hint::suggest;
//! use loa::ai::Bot;
//! use loa::board::LoaBoard;
//!
//! let board = LoaBoard::default();
//!
//! let mut bot = GreedyBot::new();
//! let mv = bot.select_move(&board).unwrap();
//! println!("the bot would play {}", mv);
//!
//! let hint = suggest(&board, board.next_player()).unwrap();
//! println!("advice: {} ({})", hint.mv, hint.category);
//! ```

pub mod board;
pub mod mv;

pub mod movegen;

pub mod checkpoint;
pub mod heuristic;

pub mod ai;

pub mod session;

pub mod io;
pub mod interface;

pub mod util;
