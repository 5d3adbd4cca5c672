//! Candidate bitboard for sudoku reasoning.
//!
//! This module provides [`CandidateGrid`], which tracks the possible
//! placements for each digit (1-9) across the entire 9×9 board using one
//! [`PositionSet`] bitboard per digit.
//!
//! # Examples
//!
//! ```
//! use sage_core::{CandidateGrid, Digit, Position};
//!
//! let mut grid = CandidateGrid::new();
//! grid.place(Position::new(4, 4), Digit::D5);
//!
//! // 5 was removed from the rest of the row, column, and box.
//! let candidates = grid.candidates_at(Position::new(4, 5));
//! assert!(!candidates.contains(Digit::D5));
//! ```

use crate::{
    bit_set_9::BitSet9,
    digit::Digit,
    digit_set::DigitSet,
    grid::DigitGrid,
    house::House,
    index::CellIndexSemantics,
    position::Position,
    position_set::PositionSet,
};

/// A bitmask of candidate positions within a house (row, column, or box).
///
/// Each bit represents one of the 9 cells in the house, in the cell index
/// order of [`House::position_from_cell_index`].
///
/// # Examples
///
/// ```
/// use sage_core::HouseMask;
///
/// let mut mask = HouseMask::new();
/// mask.insert(0);
/// mask.insert(4);
///
/// assert_eq!(mask.len(), 2);
/// ```
pub type HouseMask = BitSet9<CellIndexSemantics>;

/// Candidate bitboard across the whole board.
///
/// Maintains, for every digit, the set of positions where that digit can
/// still be placed. All technique detectors read this structure; the only
/// ways it shrinks are [`place`](Self::place) and
/// [`remove_candidate`](Self::remove_candidate).
///
/// # Examples
///
/// ```
/// use sage_core::{CandidateGrid, Digit, Position};
///
/// let mut grid = CandidateGrid::new();
/// let pos = Position::new(0, 0);
/// assert_eq!(grid.candidates_at(pos).len(), 9);
///
/// grid.place(pos, Digit::D1);
/// assert_eq!(grid.candidates_at(pos).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    /// `digits[i]` holds the possible positions for digit `(i+1)`.
    digits: [PositionSet; 9],
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&DigitGrid> for CandidateGrid {
    fn from(grid: &DigitGrid) -> Self {
        Self::from_grid(grid)
    }
}

impl CandidateGrid {
    /// Creates a candidate grid with all positions available for all digits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            digits: [PositionSet::FULL; 9],
        }
    }

    /// Builds the candidate grid implied by the filled cells of a digit grid.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        let mut candidates = Self::new();
        for pos in Position::all() {
            if let Some(digit) = grid.get(pos) {
                candidates.place(pos, digit);
            }
        }
        candidates
    }

    fn slot(&self, digit: Digit) -> &PositionSet {
        &self.digits[usize::from(digit.value() - 1)]
    }

    fn slot_mut(&mut self, digit: Digit) -> &mut PositionSet {
        &mut self.digits[usize::from(digit.value() - 1)]
    }

    /// Places a digit at a position and updates candidates accordingly.
    ///
    /// All other candidates at the position are removed, and the digit is
    /// removed from every peer of the position.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        for positions in &mut self.digits {
            positions.remove(pos);
        }

        let positions = self.slot_mut(digit);
        *positions = positions.difference(pos.peers());
        positions.insert(pos);
    }

    /// Removes a specific digit as a candidate at a position.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) {
        self.slot_mut(digit).remove(pos);
    }

    /// Returns the set of candidate digits at a position.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        Digit::ALL
            .into_iter()
            .filter(|&digit| self.slot(digit).contains(pos))
            .collect()
    }

    /// Returns the set of all positions where the digit can be placed.
    #[must_use]
    #[inline]
    pub fn digit_positions(&self, digit: Digit) -> PositionSet {
        *self.slot(digit)
    }

    /// Returns a bitmask of candidate positions for the digit within a house.
    ///
    /// If the returned mask has only one bit set, a Hidden Single is
    /// detected.
    #[must_use]
    pub fn house_mask(&self, house: House, digit: Digit) -> HouseMask {
        self.digit_positions(digit).house_mask(house)
    }

    /// Returns the positions that have no candidates left.
    ///
    /// A non-empty result means the grid is contradictory.
    #[must_use]
    pub fn contradictions(&self) -> PositionSet {
        let mut empty = PositionSet::FULL;
        for positions in &self.digits {
            empty &= !*positions;
        }
        empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_has_all_candidates() {
        let grid = CandidateGrid::new();
        for pos in Position::all() {
            assert_eq!(grid.candidates_at(pos).len(), 9);
        }
    }

    #[test]
    fn test_place_restricts_position_to_digit() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(4, 4);
        grid.place(pos, Digit::D5);

        let candidates = grid.candidates_at(pos);
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(Digit::D5));
    }

    #[test]
    fn test_place_removes_digit_from_peers() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(0, 0);
        grid.place(pos, Digit::D5);

        for peer in pos.peers() {
            assert!(
                !grid.candidates_at(peer).contains(Digit::D5),
                "peer {peer} should not have digit 5"
            );
        }
        // Non-peers keep the digit.
        assert!(grid.candidates_at(Position::new(4, 4)).contains(Digit::D5));
    }

    #[test]
    fn test_remove_candidate() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(3, 3);
        grid.remove_candidate(pos, Digit::D5);

        let candidates = grid.candidates_at(pos);
        assert_eq!(candidates.len(), 8);
        assert!(!candidates.contains(Digit::D5));
    }

    #[test]
    fn test_from_grid_reflects_givens() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        let candidates = CandidateGrid::from_grid(&grid);

        // Givens keep exactly their digit.
        assert_eq!(
            candidates.candidates_at(Position::new(0, 0)),
            DigitSet::from_elem(Digit::D5)
        );
        // (2, 0) sits next to 5 and 3 in its row and 6, 9, 8 in its box.
        let open = candidates.candidates_at(Position::new(2, 0));
        assert!(!open.contains(Digit::D5));
        assert!(!open.contains(Digit::D3));
        assert!(!open.contains(Digit::D9));
        assert!(open.contains(Digit::D1));
    }

    #[test]
    fn test_house_mask_hidden_single() {
        let mut grid = CandidateGrid::new();
        for x in 0..9 {
            if x != 7 {
                grid.remove_candidate(Position::new(x, 5), Digit::D4);
            }
        }

        let mask = grid.house_mask(House::Row { y: 5 }, Digit::D4);
        assert_eq!(mask.len(), 1);
        assert!(mask.contains(7));
    }

    #[test]
    fn test_contradictions() {
        let mut grid = CandidateGrid::new();
        assert!(grid.contradictions().is_empty());

        let pos = Position::new(4, 4);
        for digit in Digit::ALL {
            grid.remove_candidate(pos, digit);
        }
        assert_eq!(grid.contradictions(), PositionSet::from_elem(pos));
    }
}
