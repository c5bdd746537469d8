use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of colored cells, stored row-major and indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<CellColor>", into = "Array2<CellColor>")]
pub struct ColorGrid {
    cells: Array2<CellColor>,
}

impl ColorGrid {
    pub fn filled(size: Coord, color: CellColor) -> Self {
        let side = usize::from(size.max(1));
        Self {
            cells: Array2::from_elem((side, side), color),
        }
    }

    /// Builds a grid from `size * size` colors in row-major order.
    pub fn from_cells(size: Coord, cells: Vec<CellColor>) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        let side = usize::from(size);
        let cells = Array2::from_shape_vec((side, side), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub(crate) fn from_array(cells: Array2<CellColor>) -> Self {
        Self { cells }
    }

    pub fn size(&self) -> Coord {
        Coord::try_from(self.cells.nrows()).unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        let size = self.size();
        mult(size, size)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clamp_coords(&self, coords: Coord2) -> Coord2 {
        let size = self.size();
        clamp_coords(coords, (size, size))
    }

    pub fn color_at(&self, coords: Coord2) -> CellColor {
        self.cells[coords.to_nd_index()]
    }

    /// Row-major iteration over every cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, CellColor)> + '_ {
        self.cells.indexed_iter().map(|((row, col), &color)| {
            // the grid is never wider than `Coord::MAX`
            ((row as Coord, col as Coord), color)
        })
    }

    pub fn count_color(&self, color: CellColor) -> CellCount {
        let count = self.cells.iter().filter(|&&cell| cell == color).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    /// Recolors the 4-connected region of `target` that contains `origin`.
    ///
    /// Returns how many cells changed. Nothing changes when `target` equals
    /// `replacement` or when `origin` does not hold `target`.
    pub fn flood_fill(
        &mut self,
        origin: Coord2,
        target: CellColor,
        replacement: CellColor,
    ) -> Result<CellCount> {
        let origin = self.validate_coords(origin)?;
        if target == replacement {
            return Ok(0);
        }

        let mut recolored: CellCount = 0;
        let mut to_visit = vec![origin];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if *cell != target {
                continue;
            }
            *cell = replacement;
            recolored += 1;

            // reversed so the left neighbor is popped first
            to_visit.extend(self.cells.clamped_neighbors(coords).into_iter().rev());
        }

        log::trace!(
            "flood fill at {:?}: {} -> {}, {} cells",
            origin,
            target,
            replacement,
            recolored
        );
        Ok(recolored)
    }

    /// Transposes the grid in place by swapping `(row, col)` with `(col, row)`
    /// over the upper triangle.
    pub fn transpose(&mut self) {
        let side = self.cells.nrows();
        for row in 0..side {
            for col in row..side {
                self.cells.swap([row, col], [col, row]);
            }
        }
    }
}

/// Accepts only non-empty square arrays that fit in [`Coord`].
impl TryFrom<Array2<CellColor>> for ColorGrid {
    type Error = GameError;

    fn try_from(cells: Array2<CellColor>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }
}

impl From<ColorGrid> for Array2<CellColor> {
    fn from(grid: ColorGrid) -> Self {
        grid.cells
    }
}

impl Index<Coord2> for ColorGrid {
    type Output = CellColor;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
