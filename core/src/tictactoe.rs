use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

pub const BOARD_SIDE: Coord = 3;

pub const BOARD_CELLS: usize = 9;

/// Three cell indices that win when they share a mark.
pub type WinLine = [u8; 3];

/// Rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win(Mark),
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win(mark) => write!(f, "{} wins!", mark),
            Self::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// Row-major board index of `(row, col)`, if it is on the board.
pub fn board_index((row, col): Coord2) -> Option<u8> {
    (row < BOARD_SIDE && col < BOARD_SIDE).then(|| row * BOARD_SIDE + col)
}

/// Tic-tac-toe with X moving first, alternating marks and an undo stack of
/// played cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicTacToe {
    board: [Option<Mark>; BOARD_CELLS],
    current: Mark,
    history: Vec<u8>,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            current: Mark::X,
            history: Vec::new(),
        }
    }

    pub fn current_player(&self) -> Mark {
        self.current
    }

    pub fn cell_at(&self, index: u8) -> Option<Mark> {
        self.board.get(usize::from(index)).copied().flatten()
    }

    pub fn board(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.board
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }

    /// First completed line in [`WIN_LINES`] order.
    pub fn winning_line(&self) -> Option<(Mark, WinLine)> {
        WIN_LINES.into_iter().find_map(|line| {
            let [a, b, c] = line.map(|index| self.board[usize::from(index)]);
            match a {
                Some(mark) if b == a && c == a => Some((mark, line)),
                _ => None,
            }
        })
    }

    /// Puts the current mark on `index`.
    ///
    /// Occupied or off-board cells are ignored. A win or a full board ends the
    /// game and clears the board for the next one, leaving the turn with the
    /// player who just moved.
    pub fn place_mark(&mut self, index: u8) -> PlaceOutcome {
        let Some(cell) = self.board.get_mut(usize::from(index)) else {
            return PlaceOutcome::NoChange;
        };
        if cell.is_some() {
            return PlaceOutcome::NoChange;
        }

        *cell = Some(self.current);
        self.history.push(index);
        log::trace!("{} on {}", self.current, index);

        if let Some((mark, line)) = self.winning_line() {
            log::debug!("{} wins on {:?}", mark, line);
            self.clear_board();
            return PlaceOutcome::Won { mark, line };
        }

        if self.is_full() {
            log::debug!("draw");
            self.clear_board();
            return PlaceOutcome::Draw;
        }

        self.current = self.current.opposite();
        PlaceOutcome::Placed
    }

    /// Takes back the last mark and hands the turn back to its player.
    pub fn undo(&mut self) -> bool {
        let Some(index) = self.history.pop() else {
            return false;
        };
        self.board[usize::from(index)] = None;
        self.current = self.current.opposite();
        log::trace!("undo {}", index);
        true
    }

    /// Empty board, empty history, X to move.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    fn clear_board(&mut self) {
        self.board = [None; BOARD_CELLS];
        self.history.clear();
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.board.chunks(usize::from(BOARD_SIDE)).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str("|")?;
                }
                match cell {
                    Some(mark) => write!(f, " {} ", mark)?,
                    None => f.write_str("   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
