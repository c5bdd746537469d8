use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid shape does not match declared size")]
    InvalidBoardShape,
    #[error("Palette must contain at least one color")]
    EmptyPalette,
    #[error("Unknown color name")]
    UnknownColor,
}

pub type Result<T> = core::result::Result<T, GameError>;
