//! Read-only candidate view used by technique detectors.

use sage_core::{CandidateGrid, Digit, DigitGrid, DigitSet, House, HouseMask, Position, PositionSet};

/// A detection snapshot of a board: candidates plus the set of open cells.
///
/// Detectors only reason about unfilled cells, so every query here is
/// pre-restricted to the open positions of the board the snapshot was built
/// from. The snapshot is immutable; detectors report [`Hint`](crate::Hint)s
/// instead of editing candidates.
#[derive(Debug, Clone)]
pub struct HintGrid {
    candidates: CandidateGrid,
    open: PositionSet,
}

impl From<&DigitGrid> for HintGrid {
    fn from(grid: &DigitGrid) -> Self {
        Self::from_grid(grid)
    }
}

impl HintGrid {
    /// Builds a detection snapshot from a board.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        Self {
            candidates: CandidateGrid::from_grid(grid),
            open: grid.open_positions(),
        }
    }

    /// Builds a snapshot from an explicit candidate state and open set.
    ///
    /// Intended for tests and other callers that sculpt candidates directly
    /// rather than deriving them from placed digits.
    #[must_use]
    pub fn from_candidates(candidates: CandidateGrid, open: PositionSet) -> Self {
        Self { candidates, open }
    }

    /// Returns the set of unfilled positions.
    #[must_use]
    #[inline]
    pub fn open(&self) -> PositionSet {
        self.open
    }

    /// Returns the unfilled positions of a house.
    #[must_use]
    pub fn open_in_house(&self, house: House) -> PositionSet {
        self.open & house.positions()
    }

    /// Returns the candidate digits at an open position.
    ///
    /// For a filled position this returns the empty set.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        if self.open.contains(pos) {
            self.candidates.candidates_at(pos)
        } else {
            DigitSet::EMPTY
        }
    }

    /// Returns the open positions where the digit can still be placed.
    #[must_use]
    pub fn digit_positions(&self, digit: Digit) -> PositionSet {
        self.candidates.digit_positions(digit) & self.open
    }

    /// Returns a bitmask of the digit's open candidate cells within a house.
    #[must_use]
    pub fn house_mask(&self, house: House, digit: Digit) -> HouseMask {
        self.digit_positions(digit).house_mask(house)
    }

    /// Returns a bitmask of the digit's open candidate columns in a row.
    #[must_use]
    pub fn row_mask(&self, y: u8, digit: Digit) -> HouseMask {
        self.house_mask(House::Row { y }, digit)
    }

    /// Returns a bitmask of the digit's open candidate rows in a column.
    #[must_use]
    pub fn col_mask(&self, x: u8, digit: Digit) -> HouseMask {
        self.house_mask(House::Column { x }, digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells_are_not_open() {
        let mut board = DigitGrid::new();
        board.set(Position::new(0, 0), Digit::D5);
        let grid = HintGrid::from_grid(&board);

        assert!(!grid.open().contains(Position::new(0, 0)));
        assert!(grid.candidates_at(Position::new(0, 0)).is_empty());
        assert!(!grid.digit_positions(Digit::D5).contains(Position::new(0, 0)));
    }

    #[test]
    fn test_candidates_exclude_peer_digits() {
        let mut board = DigitGrid::new();
        board.set(Position::new(0, 0), Digit::D5);
        let grid = HintGrid::from_grid(&board);

        let candidates = grid.candidates_at(Position::new(8, 0));
        assert!(!candidates.contains(Digit::D5));
        assert_eq!(candidates.len(), 8);
    }

    #[test]
    fn test_row_mask_reflects_fills() {
        let mut board = DigitGrid::new();
        board.set(Position::new(3, 2), Digit::D7);
        let grid = HintGrid::from_grid(&board);

        let mask = grid.row_mask(2, Digit::D7);
        assert!(mask.is_empty());

        let mask = grid.row_mask(2, Digit::D1);
        assert_eq!(mask.len(), 8);
        assert!(!mask.contains(3));
    }
}
