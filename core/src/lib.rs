#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use grid::*;
pub use palette::*;
pub use puzzle::*;
pub use tictactoe::*;
pub use types::*;

mod error;
mod generator;
mod grid;
mod palette;
mod puzzle;
mod tictactoe;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub size: Coord,
}

impl PuzzleConfig {
    pub const DEFAULT_SIZE: Coord = 9;

    pub const fn new_unchecked(size: Coord) -> Self {
        Self { size }
    }

    pub fn new(size: Coord) -> Self {
        Self::new_unchecked(size.clamp(1, Coord::MAX))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Score a fresh puzzle of this size starts from.
    pub const fn max_score(&self) -> CellCount {
        self.total_cells()
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE)
    }
}

/// Outcome of a flood-fill move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Filled { recolored: CellCount },
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Filled { .. } => true,
        }
    }
}

/// Outcome of placing a tic-tac-toe mark.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlaceOutcome {
    NoChange,
    Placed,
    Won { mark: Mark, line: WinLine },
    Draw,
}

impl PlaceOutcome {
    pub const fn has_update(self) -> bool {
        use PlaceOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won { .. } => true,
            Draw => true,
        }
    }

    /// The finished game's result, when this move ended one.
    pub const fn result(self) -> Option<GameResult> {
        match self {
            Self::Won { mark, .. } => Some(GameResult::Win(mark)),
            Self::Draw => Some(GameResult::Draw),
            Self::NoChange | Self::Placed => None,
        }
    }
}
