use ndarray::Array2;

/// Single coordinate axis used for grid size and row/column positions.
pub type Coord = u8;

/// Count type used for cell counts and scores.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Clamps `coords` into a grid with `bounds` rows and columns.
pub fn clamp_coords((row, col): Coord2, bounds: Coord2) -> Coord2 {
    (
        row.min(bounds.0.saturating_sub(1)),
        col.min(bounds.1.saturating_sub(1)),
    )
}

pub trait NeighborExt {
    fn clamped_neighbors(&self, index: Coord2) -> [Coord2; 4];
}

impl<T> NeighborExt for Array2<T> {
    fn clamped_neighbors(&self, index: Coord2) -> [Coord2; 4] {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        clamped_neighbors(index, bounds)
    }
}

/// Left, right, up, down as `(d_row, d_col)`.
const DISPLACEMENTS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// The four orthogonal neighbors of `coords`, each clamped to `bounds`.
///
/// Cells on an edge get themselves back for the missing direction.
pub fn clamped_neighbors(coords: Coord2, bounds: Coord2) -> [Coord2; 4] {
    DISPLACEMENTS.map(|delta| apply_clamped_delta(coords, delta, bounds))
}

fn apply_clamped_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Coord2 {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    clamp_coords(
        (
            row.saturating_add_signed(d_row),
            col.saturating_add_signed(d_col),
        ),
        bounds,
    )
}
