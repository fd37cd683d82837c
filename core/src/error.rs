use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index")]
    InvalidCell,
    #[error("History has no such step")]
    InvalidStep,
    #[error("Board shape is not 3x3")]
    InvalidBoardShape,
    #[error("Location is outside the board or points at an empty cell")]
    InvalidLocation,
    #[error("History must start with a single empty board")]
    InvalidHistory,
}

pub type Result<T> = core::result::Result<T, GameError>;
