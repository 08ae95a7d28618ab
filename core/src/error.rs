use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimension must be at least 1")]
    InvalidDimension,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mine mask must be square and at most 255 cells wide")]
    InvalidBoardShape,
    #[error("Declared mine count does not match the mine mask")]
    MineCountMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
