use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

pub trait GridGenerator {
    fn generate(self, config: PuzzleConfig) -> ColorGrid;
}

/// Fills every cell independently and uniformly from a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
    palette: Vec<CellColor>,
}

impl RandomGridGenerator {
    pub fn new(seed: u64, palette: &[CellColor]) -> Result<Self> {
        if palette.is_empty() {
            return Err(GameError::EmptyPalette);
        }
        Ok(Self {
            seed,
            palette: palette.to_vec(),
        })
    }

    /// Generator drawing from every [`CellColor`].
    pub fn with_full_palette(seed: u64) -> Self {
        Self {
            seed,
            palette: CellColor::ALL.to_vec(),
        }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: PuzzleConfig) -> ColorGrid {
        use rand::prelude::*;

        if config.size == 0 {
            log::warn!("Requested an empty grid, generating a single cell instead");
        }
        let side = usize::from(config.size.max(1));

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let cells = Array2::from_shape_fn((side, side), |_| {
            self.palette[rng.random_range(0..self.palette.len())]
        });

        log::debug!(
            "generated {}x{} grid from {} colors, seed {}",
            side,
            side,
            self.palette.len(),
            self.seed
        );
        ColorGrid::from_array(cells)
    }
}

/// An already built grid generates itself.
impl GridGenerator for ColorGrid {
    fn generate(self, config: PuzzleConfig) -> ColorGrid {
        if self.size() != config.size {
            log::warn!(
                "Fixed grid is {}x{}, ignoring requested size {}",
                self.size(),
                self.size(),
                config.size
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(
            RandomGridGenerator::new(1, &[]),
            Err(GameError::EmptyPalette)
        );
    }

    #[test]
    fn same_seed_generates_same_grid() {
        let config = PuzzleConfig::default();
        let first = RandomGridGenerator::with_full_palette(42).generate(config);
        let second = RandomGridGenerator::with_full_palette(42).generate(config);

        assert_eq!(first, second);
        assert_eq!(first.size(), 9);
        assert_eq!(first.total_cells(), 81);
    }

    #[test]
    fn cells_only_use_palette_colors() {
        let palette = [CellColor::Red, CellColor::Blue];
        let grid = RandomGridGenerator::new(7, &palette)
            .unwrap()
            .generate(PuzzleConfig::new(16));

        assert!(grid.iter_cells().all(|(_, color)| palette.contains(&color)));
        assert_eq!(
            grid.count_color(CellColor::Red) + grid.count_color(CellColor::Blue),
            256
        );
    }

    #[test]
    fn single_color_palette_fills_uniformly() {
        let grid = RandomGridGenerator::new(3, &[CellColor::Green])
            .unwrap()
            .generate(PuzzleConfig::new(4));

        assert_eq!(grid, ColorGrid::filled(4, CellColor::Green));
    }
}
