#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

/// Session configuration, read once when the starting board is created.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub start_probability: f32,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, start_probability: f32) -> Self {
        Self {
            size,
            start_probability,
        }
    }

    /// Normalizes degenerate inputs instead of rejecting them: dimensions
    /// clamp to at least 1 and the probability into `[0, 1]` (NaN becomes 0).
    pub fn new((rows, cols): Coord2, start_probability: f32) -> Self {
        let size = (rows.clamp(1, Coord::MAX), cols.clamp(1, Coord::MAX));
        if size != (rows, cols) {
            log::warn!("Board size clamped from {:?} to {:?}", (rows, cols), size);
        }

        let probability = if start_probability.is_nan() {
            0.0
        } else {
            start_probability.clamp(0.0, 1.0)
        };
        if probability != start_probability {
            log::warn!(
                "Start probability clamped from {} to {}",
                start_probability,
                probability
            );
        }

        Self::new_unchecked(size, probability)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Lit-cell mask of a single game session.
///
/// Dimensions never change after construction, and `lit_count` always equals
/// the number of `true` cells in the mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    lights: Array2<bool>,
    lit_count: CellCount,
}

impl Board {
    pub fn from_lit_mask(lights: Array2<bool>) -> Self {
        let lit_count = lights
            .iter()
            .filter(|&&is_lit| is_lit)
            .count()
            .try_into()
            .unwrap();
        Self { lights, lit_count }
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut lights: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in lit_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            lights[coords.to_nd_index()] = true;
        }

        Ok(Self::from_lit_mask(lights))
    }

    pub fn unlit(size: Coord2) -> Self {
        Self {
            lights: Array2::default(size.to_nd_index()),
            lit_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lights.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.lights.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lit_count
    }

    /// The winning condition: every cell unlit.
    pub fn is_cleared(&self) -> bool {
        self.lit_count == 0
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Inverts the in-bounds subset of the flip cross around `target` and
    /// returns how many cells changed. The target itself may lie outside the
    /// board; its in-bounds neighbors still flip.
    pub fn flip_around(&mut self, target: Coord2) -> CellCount {
        let mut flipped = 0;
        for coords in self.lights.iter_flip_cross(target) {
            let cell = &mut self.lights[coords.to_nd_index()];
            *cell = !*cell;
            if *cell {
                self.lit_count += 1;
            } else {
                self.lit_count -= 1;
            }
            flipped += 1;
        }
        flipped
    }

    /// Pure variant of [`Board::flip_around`]: the receiver is left untouched
    /// as a snapshot of the pre-press state.
    pub fn flipped_around(&self, target: Coord2) -> Board {
        let mut next = self.clone();
        next.flip_around(target);
        next
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

/// Outcome of a single press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled | Self::Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: Coord2, lit: &[Coord2]) -> Board {
        Board::from_lit_coords(size, lit).unwrap()
    }

    fn lit_cells(board: &Board) -> Vec<Coord2> {
        let (rows, cols) = board.size();
        let mut lit = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if board.is_lit((row, col)) {
                    lit.push((row, col));
                }
            }
        }
        lit
    }

    #[test]
    fn flip_around_center_toggles_the_full_cross() {
        let mut board = board((3, 3), &[]);

        let flipped = board.flip_around((1, 1));

        assert_eq!(flipped, 5);
        assert_eq!(
            lit_cells(&board),
            [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn flip_around_corner_toggles_three_cells() {
        let mut board = board((3, 3), &[]);

        let flipped = board.flip_around((0, 0));

        assert_eq!(flipped, 3);
        assert_eq!(lit_cells(&board), [(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn flip_around_out_of_bounds_target_still_flips_its_neighbors() {
        let mut board = board((3, 3), &[]);

        // one row below the board, only the upward neighbor lands inside
        let flipped = board.flip_around((3, 1));

        assert_eq!(flipped, 1);
        assert_eq!(lit_cells(&board), [(2, 1)]);
    }

    #[test]
    fn flip_around_far_out_of_bounds_is_a_no_op() {
        let mut board = board((3, 3), &[(0, 0)]);

        assert_eq!(board.flip_around((200, 200)), 0);
        assert_eq!(lit_cells(&board), [(0, 0)]);
    }

    #[test]
    fn double_flip_restores_the_original_board() {
        let original = board((4, 5), &[(0, 0), (1, 3), (2, 2), (3, 4)]);

        let pressed = original.flipped_around((2, 2));
        assert_ne!(pressed, original);
        assert_eq!(pressed.flipped_around((2, 2)), original);
    }

    #[test]
    fn flipped_around_leaves_the_snapshot_untouched() {
        let snapshot = board((3, 3), &[(1, 1)]);

        let next = snapshot.flipped_around((1, 1));

        assert_eq!(lit_cells(&snapshot), [(1, 1)]);
        assert!(!next.is_lit((1, 1)));
        assert_eq!(next.lit_count(), 4);
    }

    #[test]
    fn flip_changes_nothing_outside_the_cross() {
        let before = board((5, 5), &[(0, 4), (4, 0), (2, 2)]);
        let after = before.flipped_around((2, 2));

        let cross = [(2, 2), (2, 3), (2, 1), (3, 2), (1, 2)];
        for row in 0..5 {
            for col in 0..5 {
                let coords = (row, col);
                if cross.contains(&coords) {
                    assert_ne!(before.is_lit(coords), after.is_lit(coords));
                } else {
                    assert_eq!(before.is_lit(coords), after.is_lit(coords));
                }
            }
        }
    }

    #[test]
    fn from_lit_coords_rejects_out_of_bounds_cells() {
        let result = Board::from_lit_coords((2, 2), &[(0, 0), (2, 0)]);

        assert_eq!(result, Err(GameError::InvalidCoords));
    }

    #[test]
    fn lit_count_tracks_the_mask() {
        let mut board = board((3, 3), &[(0, 0), (0, 1)]);
        assert_eq!(board.lit_count(), 2);

        board.flip_around((0, 0));
        assert_eq!(board.lit_count(), 1);
        assert_eq!(lit_cells(&board), [(1, 0)]);
    }

    #[test]
    fn config_clamps_degenerate_inputs() {
        let config = GameConfig::new((0, 7), -0.5);
        assert_eq!(config.size, (1, 7));
        assert_eq!(config.start_probability, 0.0);

        let config = GameConfig::new((3, 3), 1.5);
        assert_eq!(config.start_probability, 1.0);

        let config = GameConfig::new((3, 3), f32::NAN);
        assert_eq!(config.start_probability, 0.0);
        assert_eq!(config.total_cells(), 9);
    }
}
