use super::Mark;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({x}, {y}) is occupied")]
    OccupiedCell { x: usize, y: usize },
    #[error("cell ({x}, {y}) is out of the board (expected: 0-2)")]
    OutOfBounds { x: usize, y: usize },
    #[error("players are not initialized")]
    NotInitialized,
    #[error("both players have mark {0}")]
    DuplicateMark(Mark),
    #[error("can't make turn on a finished game")]
    GameIsFinished,
}

impl GameError {
    pub fn occupied_cell(x: usize, y: usize) -> Self {
        Self::OccupiedCell { x, y }
    }

    pub fn out_of_bounds(x: usize, y: usize) -> Self {
        Self::OutOfBounds { x, y }
    }
}
