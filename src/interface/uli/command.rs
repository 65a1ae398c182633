#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command<'a> {
    Uli,
    IsReady,
    NewGame,
    Quit,
    Print,
    Position {
        position: Position<'a>,
        moves: Option<&'a str>,
    },
    Moves(&'a str),
    Go,
    Hint,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Position<'a> {
    StartPos,
    Fen(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(input: &'a str) -> Result<Command, nom::Err<nom::error::Error<&str>>> {
        parse::command()(input).map(|(left, command)| {
            assert!(left.is_empty());
            command
        })
    }
}

mod parse {
    use nom::branch::alt;
    use nom::bytes::complete::{tag, take_until, take_while};
    use nom::combinator::{eof, map, opt, value};
    use nom::sequence::{preceded, terminated, tuple};
    use nom::IResult;

    use super::*;

    pub fn command<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, Command<'a>> {
        let position = map(
            tuple((
                tag("position "),
                alt((
                    value(Position::StartPos, tag("startpos")),
                    preceded(
                        tag("fen "),
                        map(alt((take_until(" moves"), take_while(|_| true))), Position::Fen),
                    ),
                )),
                opt(preceded(tag(" moves "), take_while(|_| true))),
            )),
            |(_, position, moves)| Command::Position { position, moves },
        );

        let moves = map(preceded(tag("moves "), take_while(|_| true)), |moves| {
            Command::Moves(moves)
        });

        let main = alt((
            value(Command::NewGame, tag("ulinewgame")),
            value(Command::Uli, tag("uli")),
            value(Command::IsReady, tag("isready")),
            value(Command::Quit, tag("quit")),
            value(Command::Print, alt((tag("print"), tag("d")))),
            value(Command::Go, tag("go")),
            value(Command::Hint, tag("hint")),
            position,
            moves,
        ));

        terminated(main, eof)
    }
}
