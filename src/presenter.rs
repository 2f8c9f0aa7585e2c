//! Glue between a [`TicTacToe`] game and whatever draws it.
//!
//! A presentation layer implements [`Renderer`] and forwards user input to a [`Session`]:
//! cell activations go to [`Session::on_cell_activated`], the "new game" action goes to
//! [`Session::on_new_game`]. The session re-renders after every state change.

use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::game::{Board, GameError, GameResult, GridIndex, Outcome, Player, TicTacToe};

/// Status line shown under the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    ToMove(Player),
    Won(Player),
    Tie,
}

impl Status {
    pub fn of(game: &TicTacToe) -> GameResult<Self> {
        let status = match game.result()? {
            Outcome::InProgress => Status::ToMove(game.current_turn()?.clone()),
            Outcome::Tie => Status::Tie,
            Outcome::Win(player) => Status::Won(player),
        };
        Ok(status)
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, Status::ToMove(_))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::ToMove(player) => write!(f, "{} to move", player),
            Status::Won(player) => write!(f, "{} has won!", player),
            Status::Tie => f.write_str("It's a tie."),
        }
    }
}

/// Something that can draw the board together with the status line.
pub trait Renderer {
    type Error;

    fn render(&mut self, board: &Board, status: &Status) -> Result<(), Self::Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum SessionError<E> {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("failed to render the board: {0}")]
    Render(E),
}

impl<E> SessionError<E> {
    /// Returns the game error if the failure came from the game itself.
    pub fn as_game_error(&self) -> Option<&GameError> {
        match self {
            SessionError::Game(err) => Some(err),
            SessionError::Render(_) => None,
        }
    }
}

pub type SessionResult<T, E> = Result<T, SessionError<E>>;

/// A game bound to a renderer.
#[derive(Debug)]
pub struct Session<R> {
    game: TicTacToe,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Takes an initialized game and renders it right away.
    pub fn new(game: TicTacToe, renderer: R) -> SessionResult<Self, R::Error> {
        game.players()?;
        let mut session = Self { game, renderer };
        session.refresh()?;
        Ok(session)
    }

    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (TicTacToe, R) {
        (self.game, self.renderer)
    }

    pub fn status(&self) -> GameResult<Status> {
        Status::of(&self.game)
    }

    /// A cell accepts input only while the game is running and the cell is empty.
    pub fn is_cell_active(&self, x: usize, y: usize) -> bool {
        !self.game.is_over()
            && self
                .game
                .board()
                .get(GridIndex::new(y, x))
                .is_some_and(|cell| cell.is_none())
    }

    /// Plays the current player's move at column `x`, row `y`.
    /// The board is locked once the game is over.
    pub fn on_cell_activated(&mut self, x: usize, y: usize) -> SessionResult<Status, R::Error> {
        if self.game.is_over() {
            debug!(x, y, "board is locked");
            return Err(GameError::GameIsFinished.into());
        }
        self.game.play_move(x, y)?;
        self.refresh()
    }

    pub fn on_new_game(&mut self) -> SessionResult<Status, R::Error> {
        self.game.reset();
        self.refresh()
    }

    fn refresh(&mut self) -> SessionResult<Status, R::Error> {
        let status = self.status()?;
        self.renderer
            .render(self.game.board(), &status)
            .map_err(SessionError::Render)?;
        Ok(status)
    }
}
