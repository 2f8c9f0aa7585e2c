use std::io::{self, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use crate::game::{Board, BOARD_SIZE};
use crate::presenter::{Renderer, Status};

pub const HELP: &str = "\
commands:
  <x> <y>   put your mark at column x, row y (0-2)
  new       start a new game
  help      show this message
  quit      leave the game";

/// Draws the board as text into any writer.
///
/// ```text
///     0  1  2
/// 0  [X][ ][ ]
/// 1  [ ][O][ ]
/// 2  [ ][ ][ ]
/// X to move
/// ```
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, board: &Board, status: &Status) -> Result<(), Self::Error> {
        write!(self.out, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(self.out, " {} ", col)?;
        }
        writeln!(self.out)?;
        for (row, cells) in board.iter().enumerate() {
            write!(self.out, "{}  ", row)?;
            for cell in cells {
                write!(self.out, "{}", cell)?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", status)?;
        self.out.flush()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("expected two coordinates, found {0}")]
    InvalidCoordinatesNumber(usize),
    #[error(transparent)]
    InvalidCoordinate(#[from] ParseIntError),
}

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play { x: usize, y: usize },
    NewGame,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "new" | "n" => return Ok(Command::NewGame),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(CommandError::Unknown(line.to_string()));
        }
        let coords: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let &[x, y] = coords.as_slice() else {
            return Err(CommandError::InvalidCoordinatesNumber(coords.len()));
        };
        Ok(Command::Play {
            x: x.parse()?,
            y: y.parse()?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::{Mark, Player};

    #[test]
    fn test_parse_moves() {
        assert_eq!("1 2".parse(), Ok(Command::Play { x: 1, y: 2 }));
        assert_eq!("  0,2 \n".parse(), Ok(Command::Play { x: 0, y: 2 }));
        assert_eq!("2, 0".parse(), Ok(Command::Play { x: 2, y: 0 }));
        // range is checked by the game, not by the parser
        assert_eq!("5 9".parse(), Ok(Command::Play { x: 5, y: 9 }));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("new".parse(), Ok(Command::NewGame));
        assert_eq!("N".parse(), Ok(Command::NewGame));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "1".parse::<Command>(),
            Err(CommandError::InvalidCoordinatesNumber(1))
        );
        assert_eq!(
            "1 2 0".parse::<Command>(),
            Err(CommandError::InvalidCoordinatesNumber(3))
        );
        assert!(matches!(
            "1 x".parse::<Command>(),
            Err(CommandError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_render() {
        let mut board = Board::default();
        board[(0, 0).into()] = Mark::X.into();
        board[(1, 2).into()] = Mark::O.into();
        let status = Status::ToMove(Player::new("bob", false));

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&board, &status).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            text,
            "    0  1  2 \n0  [X][ ][ ]\n1  [ ][ ][O]\n2  [ ][ ][ ]\nbob to move\n"
        );
    }
}
