use std::io::{BufRead, BufReader, BufWriter, Read};
use std::io::{ErrorKind, Write};

use crate::ai::hint::suggest;
use crate::ai::Bot;
use crate::board::{LoaBoard, PlayError};
use crate::interface::uli::command::{Command, Position};
use crate::mv::Move;

/// Run the engine loop until `quit` or end of input.
///
/// Everything read and written also goes to `log`, prefixed with `>`/`<`.
/// A broken pipe is treated as a clean exit, the front-end just went away.
pub fn run(
    bot: impl Bot,
    name: &str,
    author: &str,
    input: impl Read,
    output: impl Write,
    log: impl Write,
) -> std::io::Result<()> {
    let result = run_inner(bot, name, author, input, output, log);

    if let Err(err) = &result {
        if err.kind() == ErrorKind::BrokenPipe {
            return Ok(());
        }
    }

    result
}

fn run_inner(
    mut bot: impl Bot,
    name: &str,
    author: &str,
    input: impl Read,
    output: impl Write,
    log: impl Write,
) -> std::io::Result<()> {
    let mut input = BufReader::new(input);
    let mut output = Output {
        output: BufWriter::new(output),
        log: BufWriter::new(log),
    };

    let mut line = String::new();
    let mut curr: Option<LoaBoard> = None;

    loop {
        output.flush()?;

        line.clear();
        let line_result = input.read_line(&mut line)?;

        // check for eof
        if line_result == 0 {
            return Ok(());
        }

        let line = line.trim();
        output.log(&format!("> {}", line))?;

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(_) => {
                output.error(&format!("failed to parse command '{}'", line))?;
                continue;
            }
        };

        match command {
            Command::Uli => {
                output.respond(&format!("id name {}", name))?;
                output.respond(&format!("id author {}", author))?;
                output.respond("uliok")?;
            }
            Command::IsReady => {
                output.respond("readyok")?;
            }
            Command::NewGame => {
                curr = Some(LoaBoard::default());
            }
            Command::Print => match &curr {
                Some(board) => {
                    let board = board.to_string();
                    output.info("current board:")?;
                    for line in board.lines() {
                        output.info(line)?;
                    }
                }
                None => output.error("cannot print, no board")?,
            },
            Command::Position { position, moves } => {
                let board = match position {
                    Position::StartPos => LoaBoard::default(),
                    Position::Fen(fen) => match LoaBoard::from_fen(fen) {
                        Ok(board) => board,
                        Err(err) => {
                            output.error(&format!("invalid fen '{}': {}", err.fen, err.reason))?;
                            continue;
                        }
                    },
                };
                curr = Some(board);
                if let Some(moves) = moves {
                    apply_moves(&mut output, &mut curr, moves)?;
                }
            }
            Command::Moves(moves) => {
                apply_moves(&mut output, &mut curr, moves)?;
            }
            Command::Go => {
                let board = match &curr {
                    Some(board) => board,
                    None => {
                        output.error("received go command without having a board")?;
                        continue;
                    }
                };

                if let Some(winner) = board.winner() {
                    output.error(&format!("cannot go on finished game, won by {}", winner))?;
                    continue;
                }

                match bot.select_move(board) {
                    Some(mv) => output.respond(&format!("bestmove {}", mv.to_uli()))?,
                    None => {
                        // the side to move is stuck, report it rather than pass
                        output.respond("bestmove none")?;
                    }
                }
            }
            Command::Hint => {
                let board = match &curr {
                    Some(board) => board,
                    None => {
                        output.error("received hint command without having a board")?;
                        continue;
                    }
                };

                match suggest(board, board.next_player()) {
                    Some(hint) => output.respond(&format!("hint {} {}", hint.category, hint.mv.to_uli()))?,
                    None => output.respond("hint none")?,
                }
            }
            Command::Quit => return Ok(()),
        }
    }
}

fn apply_moves<O: Write, L: Write>(
    output: &mut Output<O, L>,
    curr: &mut Option<LoaBoard>,
    moves: &str,
) -> std::io::Result<()> {
    let board = match curr {
        None => {
            output.error("received moves command without having a board")?;
            return Ok(());
        }
        Some(board) => board,
    };

    for mv in moves.trim().split(' ') {
        let mv = mv.trim();
        if mv.is_empty() {
            continue;
        }

        let mv = match Move::from_uli(mv) {
            Ok(mv) => mv,
            Err(_) => {
                output.error(&format!("invalid move '{}'", mv))?;
                return Ok(());
            }
        };

        match board.play(mv) {
            Err(PlayError::BoardDone) => {
                output.error(&format!("cannot play move '{}', the game is already over", mv))?;
                return Ok(());
            }
            Err(PlayError::UnavailableMove) => {
                output.error(&format!("move '{}' is not available", mv))?;
                return Ok(());
            }
            Ok(()) => {}
        }
    }

    Ok(())
}

struct Output<O, L> {
    output: O,
    log: L,
}

impl<O: Write, L: Write> Output<O, L> {
    fn respond(&mut self, s: &str) -> std::io::Result<()> {
        assert!(!s.contains('\n'), "ULI response cannot contain newline");
        writeln!(&mut self.log, "< {}", s)?;
        writeln!(&mut self.output, "{}", s)?;
        Ok(())
    }

    fn info(&mut self, msg: &str) -> std::io::Result<()> {
        self.respond(&format!("info string (info): {}", msg))?;
        Ok(())
    }

    fn error(&mut self, msg: &str) -> std::io::Result<()> {
        self.respond(&format!("info string (error): {}", msg))?;
        Ok(())
    }

    fn log(&mut self, s: &str) -> std::io::Result<()> {
        writeln!(&mut self.log, "{}", s)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.output.flush()?;
        self.log.flush()?;
        Ok(())
    }
}
