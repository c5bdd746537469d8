use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::GameError;

/// Red, green and blue channels.
pub type Rgb = (u8, u8, u8);

/// Colors a puzzle cell can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellColor {
    White,
    Black,
    Red,
    Green,
    Blue,
}

impl CellColor {
    pub const ALL: [CellColor; 5] = [
        CellColor::White,
        CellColor::Black,
        CellColor::Red,
        CellColor::Green,
        CellColor::Blue,
    ];

    pub const fn rgb(self) -> Rgb {
        use CellColor::*;
        match self {
            White => (255, 255, 255),
            Black => (0, 0, 0),
            Red => (255, 0, 0),
            Green => (0, 255, 0),
            Blue => (0, 0, 255),
        }
    }

    pub const fn name(self) -> &'static str {
        use CellColor::*;
        match self {
            White => "white",
            Black => "black",
            Red => "red",
            Green => "green",
            Blue => "blue",
        }
    }
}

impl Default for CellColor {
    fn default() -> Self {
        Self::White
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellColor {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or(GameError::UnknownColor)
    }
}
