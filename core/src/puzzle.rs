use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flood-fill color puzzle: a grid, its snapshot history, the selected
/// replacement color and the score.
///
/// The starting grid is kept apart from later snapshots, so the history can
/// never lose its first entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloodPuzzle {
    initial: ColorGrid,
    snapshots: Vec<ColorGrid>,
    replacement: CellColor,
    score: Saturating<CellCount>,
}

impl FloodPuzzle {
    pub fn new(grid: ColorGrid) -> Self {
        let score = Saturating(grid.total_cells());
        Self {
            initial: grid,
            snapshots: Vec::new(),
            replacement: Default::default(),
            score,
        }
    }

    pub fn generate(generator: impl GridGenerator, config: PuzzleConfig) -> Self {
        Self::new(generator.generate(config))
    }

    /// Replaces the whole history with a freshly generated grid.
    ///
    /// The selected replacement color is kept.
    pub fn new_game(&mut self, generator: impl GridGenerator, config: PuzzleConfig) {
        self.initial = generator.generate(config);
        self.snapshots.clear();
        self.score = Saturating(self.max_score());
        log::debug!("new {}x{} puzzle", self.size(), self.size());
    }

    /// The active grid, i.e. the most recent snapshot.
    pub fn grid(&self) -> &ColorGrid {
        self.snapshots.last().unwrap_or(&self.initial)
    }

    pub fn initial_grid(&self) -> &ColorGrid {
        &self.initial
    }

    pub fn history_len(&self) -> usize {
        self.snapshots.len() + 1
    }

    pub fn size(&self) -> Coord {
        self.initial.size()
    }

    pub fn score(&self) -> CellCount {
        self.score.0
    }

    pub fn max_score(&self) -> CellCount {
        self.initial.total_cells()
    }

    pub fn replacement_color(&self) -> CellColor {
        self.replacement
    }

    pub fn select_color(&mut self, color: CellColor) {
        log::trace!("replacement color: {}", color);
        self.replacement = color;
    }

    /// Selects a color by its palette name, leaving the selection untouched
    /// when the name is unknown.
    pub fn select_color_by_name(&mut self, name: &str) -> Result<CellColor> {
        let color = name.parse()?;
        self.select_color(color);
        Ok(color)
    }

    /// Flood-fills from `origin` with the replacement color on a copy of the
    /// active grid and pushes the copy.
    ///
    /// Out-of-range coordinates are clamped onto the grid.
    pub fn apply_move(&mut self, origin: Coord2) -> MoveOutcome {
        let grid = self.grid();
        let origin = grid.clamp_coords(origin);
        let target = grid.color_at(origin);

        if target == self.replacement {
            return MoveOutcome::NoChange;
        }

        let mut next = grid.clone();
        let recolored = match next.flood_fill(origin, target, self.replacement) {
            Ok(recolored) => recolored,
            Err(err) => {
                log::error!("flood fill at {:?} failed: {}", origin, err);
                return MoveOutcome::NoChange;
            }
        };

        self.snapshots.push(next);
        self.score -= 1;
        log::debug!(
            "move at {:?}: {} cells, score {}, history {}",
            origin,
            recolored,
            self.score.0,
            self.history_len()
        );
        MoveOutcome::Filled { recolored }
    }

    /// Drops the most recent snapshot unless only the starting grid is left.
    ///
    /// The score is not given back.
    pub fn undo(&mut self) -> bool {
        let undone = self.snapshots.pop().is_some();
        if undone {
            log::debug!("undo, history {}", self.history_len());
        }
        undone
    }

    /// Transposes the active grid in place without adding a snapshot.
    pub fn transpose(&mut self) {
        match self.snapshots.last_mut() {
            Some(grid) => grid.transpose(),
            None => self.initial.transpose(),
        }
    }

    /// Back to the starting grid with a full score.
    pub fn restart(&mut self) {
        self.snapshots.clear();
        self.score = Saturating(self.max_score());
        log::debug!("restart");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use CellColor::*;

    fn checkered() -> ColorGrid {
        ColorGrid::from_cells(
            3,
            vec![
                Red, Red, Blue, //
                Green, Red, Blue, //
                Green, Green, Black,
            ],
        )
        .unwrap()
    }

    fn puzzle() -> FloodPuzzle {
        FloodPuzzle::new(checkered())
    }

    #[test]
    fn new_puzzle_has_full_score_and_white_selected() {
        let puzzle = puzzle();

        assert_eq!(puzzle.score(), 9);
        assert_eq!(puzzle.max_score(), 9);
        assert_eq!(puzzle.history_len(), 1);
        assert_eq!(puzzle.replacement_color(), White);
        assert_eq!(puzzle.grid(), &checkered());
    }

    #[test]
    fn move_pushes_filled_copy_and_costs_a_point() {
        let mut puzzle = puzzle();
        puzzle.select_color(Blue);

        let outcome = puzzle.apply_move((0, 0));

        assert_eq!(outcome, MoveOutcome::Filled { recolored: 3 });
        assert_eq!(puzzle.history_len(), 2);
        assert_eq!(puzzle.score(), 8);
        assert_eq!(puzzle.grid().count_color(Blue), 5);
        assert_eq!(puzzle.initial_grid(), &checkered());
    }

    #[test]
    fn move_on_the_selected_color_changes_nothing() {
        let mut puzzle = puzzle();
        puzzle.select_color(Red);

        assert_eq!(puzzle.apply_move((1, 1)), MoveOutcome::NoChange);
        assert_eq!(puzzle.history_len(), 1);
        assert_eq!(puzzle.score(), 9);
    }

    #[test]
    fn move_reads_color_at_row_then_column() {
        let mut puzzle = puzzle();
        puzzle.select_color(White);

        // (2, 0) is green while (0, 2) is blue
        assert_eq!(
            puzzle.apply_move((2, 0)),
            MoveOutcome::Filled { recolored: 3 }
        );
        assert_eq!(puzzle.grid().count_color(Green), 0);
        assert_eq!(puzzle.grid().count_color(Blue), 2);
    }

    #[test]
    fn out_of_range_moves_are_clamped() {
        let mut puzzle = puzzle();
        puzzle.select_color(Red);

        assert_eq!(
            puzzle.apply_move((40, 40)),
            MoveOutcome::Filled { recolored: 1 }
        );
        assert_eq!(puzzle.grid().color_at((2, 2)), Red);
    }

    #[test]
    fn undo_then_replay_reaches_the_same_state() {
        let mut puzzle = puzzle();
        puzzle.select_color(Green);
        puzzle.apply_move((0, 0));
        let after_move = puzzle.grid().clone();

        assert!(puzzle.undo());
        assert_eq!(puzzle.grid(), &checkered());
        puzzle.apply_move((0, 0));

        assert_eq!(puzzle.grid(), &after_move);
    }

    #[test]
    fn undo_never_removes_the_starting_grid() {
        let mut puzzle = puzzle();
        puzzle.select_color(Black);
        puzzle.apply_move((0, 0));

        assert!(puzzle.undo());
        assert!(!puzzle.undo());
        assert!(!puzzle.undo());
        assert_eq!(puzzle.history_len(), 1);
        assert_eq!(puzzle.grid(), &checkered());
    }

    #[test]
    fn undo_keeps_the_score() {
        let mut puzzle = puzzle();
        puzzle.select_color(Black);
        puzzle.apply_move((0, 0));
        puzzle.undo();

        assert_eq!(puzzle.score(), 8);
    }

    #[test]
    fn score_stops_at_zero() {
        let mut puzzle = FloodPuzzle::new(ColorGrid::filled(1, White));

        for turn in 0..5 {
            let color = if turn % 2 == 0 { Red } else { Blue };
            puzzle.select_color(color);
            assert!(puzzle.apply_move((0, 0)).has_update());
        }

        assert_eq!(puzzle.score(), 0);
        assert_eq!(puzzle.history_len(), 6);
    }

    #[test]
    fn transpose_mutates_the_active_snapshot_only() {
        let mut puzzle = puzzle();
        puzzle.select_color(White);
        puzzle.apply_move((2, 2));
        let mut expected = puzzle.grid().clone();
        expected.transpose();

        puzzle.transpose();

        assert_eq!(puzzle.grid(), &expected);
        assert_eq!(puzzle.history_len(), 2);
        puzzle.undo();
        assert_eq!(puzzle.grid(), &checkered());
    }

    #[test]
    fn transpose_twice_is_identity() {
        let mut puzzle = puzzle();

        puzzle.transpose();
        puzzle.transpose();

        assert_eq!(puzzle.grid(), &checkered());
    }

    #[test]
    fn restart_returns_to_the_first_grid() {
        let mut puzzle = puzzle();
        puzzle.select_color(Blue);
        puzzle.apply_move((0, 0));
        puzzle.select_color(Black);
        puzzle.apply_move((1, 0));

        puzzle.restart();

        assert_eq!(puzzle.history_len(), 1);
        assert_eq!(puzzle.score(), 9);
        assert_eq!(puzzle.grid(), &checkered());
        assert_eq!(puzzle.replacement_color(), Black);
    }

    #[test]
    fn select_color_by_name_rejects_unknown_names() {
        let mut puzzle = puzzle();
        puzzle.select_color(Green);

        assert_eq!(puzzle.select_color_by_name("red"), Ok(Red));
        assert_eq!(
            puzzle.select_color_by_name("mauve"),
            Err(GameError::UnknownColor)
        );
        assert_eq!(puzzle.replacement_color(), Red);
    }

    #[test]
    fn new_game_reseeds_history_and_score() {
        let mut puzzle = puzzle();
        puzzle.select_color(Blue);
        puzzle.apply_move((0, 0));

        puzzle.new_game(
            RandomGridGenerator::with_full_palette(5),
            PuzzleConfig::default(),
        );

        assert_eq!(puzzle.history_len(), 1);
        assert_eq!(puzzle.size(), 9);
        assert_eq!(puzzle.score(), 81);
        assert_eq!(puzzle.replacement_color(), Blue);
    }
}
