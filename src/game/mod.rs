pub mod tic_tac_toe;

mod error;
mod grid;
mod player;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

use generic_array::typenum::U3;

pub use error::GameError;
pub use grid::{Grid, GridIndex};
pub use player::{Player, PlayerQueue};
pub use tic_tac_toe::{Evaluation, Outcome, TicTacToe};

pub type GameResult<T> = Result<T, GameError>;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Symbol a player puts on the board. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> BoardCell<T> {
    pub fn empty() -> Self {
        Self(None)
    }
}

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

pub type Cell = BoardCell<Mark>;

/// 3x3 grid of cells, addressed as `(row, col)`.
pub type Board = Grid<Cell, U3, U3>;
