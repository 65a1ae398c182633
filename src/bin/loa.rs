//! Terminal front-end: a human (black) against the greedy bot (white).

use std::io::{self, BufRead, Write};

use internal_iterator::InternalIterator;

use loa::ai::greedy::GreedyBot;
use loa::ai::Bot;
use loa::board::{LoaBoard, Player};
use loa::io::InvalidUliMove;
use loa::mv::Move;
use loa::session::{Phase, Session, Touched};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

fn run(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let mut session = Session::new();
    let mut bot = GreedyBot::new();

    writeln!(output, "Lines of Action, you play black (x).")?;
    writeln!(output, "Enter moves like b8b6, or: hint, moves, quit.")?;

    loop {
        writeln!(output, "{}", session.board())?;

        if let Phase::GameOver { winner } = *session.phase() {
            writeln!(output, "{} wins!", winner)?;
            return Ok(());
        }

        match session.board().next_player() {
            Player::Black => {
                if !human_turn(&mut session, input, output)? {
                    return Ok(());
                }
            }
            Player::White => match bot.select_move(session.board()) {
                Some(mv) => {
                    writeln!(output, "White plays {}", mv)?;
                    stage_and_commit(&mut session, mv);
                }
                None => {
                    writeln!(output, "White has no legal moves!")?;
                    return Ok(());
                }
            },
        }
    }
}

/// One human prompt/command cycle. Returns `false` on quit or end of input.
fn human_turn(session: &mut Session, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    loop {
        write!(output, "black> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        let line = line.trim();

        match line {
            "quit" => return Ok(false),
            "hint" => match session.hint() {
                Some(hint) => writeln!(output, "hint ({}): {}", hint.category, hint.mv)?,
                None => writeln!(output, "no legal moves available")?,
            },
            "moves" => {
                writeln!(output, "{}", move_list(session.board()).join(" "))?;
            }
            _ => match Move::from_uli(line) {
                Ok(mv) => {
                    if session.board().is_available_move(mv) == Ok(true) {
                        stage_and_commit(session, mv);
                        return Ok(true);
                    }
                    writeln!(output, "move {} is not legal", mv)?;
                }
                Err(InvalidUliMove(s)) => {
                    writeln!(output, "unknown command or malformed move '{}'", s)?;
                }
            },
        }
    }
}

/// Drive the session through its select/stage/commit cycle for a known-legal move.
fn stage_and_commit(session: &mut Session, mv: Move) {
    session.touch(mv.from);
    let staged = session.touch(mv.to);
    debug_assert_eq!(staged, Touched::Staged { mv });
    session.commit_pending();
}

fn move_list(board: &LoaBoard) -> Vec<String> {
    match board.available_moves() {
        Ok(moves) => moves.map(|mv: Move| mv.to_uli()).collect(),
        Err(_) => vec![],
    }
}
