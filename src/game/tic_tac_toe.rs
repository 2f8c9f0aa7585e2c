use tracing::{debug, info};

use crate::game::{Board, GameError, GameResult, GridIndex, Mark, Player, PlayerQueue, BOARD_SIZE};

/// State of the board computed on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    InProgress,
    Tie,
    Win(Mark),
}

impl Evaluation {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }
}

/// [`Evaluation`] with the winning mark resolved to its player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Tie,
    Win(Player),
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Returns the mark if every cell of the line holds it.
fn line_winner<'a>(mut line: impl Iterator<Item = &'a crate::game::Cell>) -> Option<Mark> {
    let first = line.next()?.0?;
    line.all(|cell| cell.0 == Some(first)).then_some(first)
}

/// Rows and columns are checked pairwise by index, diagonals only when the center is taken.
/// A full board without a line is a tie.
pub fn evaluate(board: &Board) -> Evaluation {
    for i in 0..BOARD_SIZE {
        let row = line_winner(board.right_iter((i, 0).into()));
        let col = || line_winner(board.bottom_iter((0, i).into()));
        if let Some(mark) = row.or_else(col) {
            return Evaluation::Win(mark);
        }
    }

    if board[(1, 1).into()].is_some() {
        let main = line_winner(board.bottom_right_iter((0, 0).into()));
        let anti = || line_winner(board.bottom_left_iter((0, BOARD_SIZE - 1).into()));
        if let Some(mark) = main.or_else(anti) {
            return Evaluation::Win(mark);
        }
    }

    if board.all_indexed().any(|(_, cell)| cell.is_none()) {
        Evaluation::InProgress
    } else {
        Evaluation::Tie
    }
}

/// A single game of tic-tac-toe between two players.
#[derive(Clone, Debug, Default)]
pub struct TicTacToe {
    players: Option<PlayerQueue>,
    board: Board,
}

impl TicTacToe {
    /// Creates a game with an empty board and no players assigned.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(a: Player, b: Player) -> GameResult<Self> {
        let mut game = Self::new();
        game.initialize_players(a, b)?;
        Ok(game)
    }

    /// Assigns players to their marks and gives the turn to the [`Mark::X`] player.
    /// Any previous assignment is replaced, the board is left as is.
    pub fn initialize_players(&mut self, a: Player, b: Player) -> GameResult<()> {
        if a.mark() == b.mark() {
            return Err(GameError::DuplicateMark(a.mark()));
        }
        debug!(x = %a, o = %b, "assigning players");
        self.players = Some(PlayerQueue::new(a, b));
        Ok(())
    }

    pub fn players(&self) -> GameResult<&PlayerQueue> {
        self.players.as_ref().ok_or(GameError::NotInitialized)
    }

    pub fn current_turn(&self) -> GameResult<&Player> {
        Ok(self.players()?.current())
    }

    /// Puts the mark of the current player at column `x`, row `y` and passes the turn.
    /// Nothing changes if the move is rejected.
    ///
    /// Moves are accepted after the game is over as well, callers check [`Self::is_over`].
    pub fn play_move(&mut self, x: usize, y: usize) -> GameResult<()> {
        let index = GridIndex::new(y, x);
        if !Board::contains(index) {
            debug!(x, y, "rejected move out of the board");
            return Err(GameError::out_of_bounds(x, y));
        }
        let players = self.players.as_mut().ok_or(GameError::NotInitialized)?;
        let cell = &mut self.board[index];
        if cell.is_some() {
            debug!(x, y, "rejected move to occupied cell");
            return Err(GameError::occupied_cell(x, y));
        }

        let mark = players.current().mark();
        *cell = mark.into();
        let next = players.advance();
        debug!(x, y, %mark, next = %next, "move accepted");

        if let Evaluation::Win(winner) = evaluate(&self.board) {
            info!(%winner, "game is won");
        } else if self.is_over() {
            info!("game is tied");
        }
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.evaluate().is_finished()
    }

    pub fn result(&self) -> GameResult<Outcome> {
        let players = self.players()?;
        let outcome = match self.evaluate() {
            Evaluation::InProgress => Outcome::InProgress,
            Evaluation::Tie => Outcome::Tie,
            Evaluation::Win(mark) => Outcome::Win(
                players
                    .find_by_mark(mark)
                    .cloned()
                    .ok_or(GameError::NotInitialized)?,
            ),
        };
        Ok(outcome)
    }

    /// Empties the board and gives the turn back to the [`Mark::X`] player.
    pub fn reset(&mut self) {
        self.board.clear();
        if let Some(players) = self.players.as_mut() {
            players.rewind();
        }
        debug!("game reset");
    }
}
