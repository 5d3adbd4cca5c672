//! The placed-digit view of a board.
//!
//! [`DigitGrid`] stores which digit, if any, occupies each of the 81 cells.
//! It carries no candidate information; see
//! [`CandidateGrid`](crate::candidates::CandidateGrid) for that.

use std::{fmt, str::FromStr};

use crate::{Digit, Position, PositionSet};

/// A 9×9 grid of placed digits.
///
/// Cells are either filled with a [`Digit`] or empty. The grid can be parsed
/// from and rendered to an 81-character string:
///
/// - Digits 1-9 represent filled cells
/// - `.`, `_`, or `0` represent empty cells
/// - Whitespace is ignored when parsing
///
/// # Examples
///
/// ```
/// use sage_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit placed at a position, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.index())]
    }

    /// Places a digit at a position, replacing any previous digit.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[usize::from(pos.index())] = Some(digit);
    }

    /// Empties a cell.
    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.cells[usize::from(pos.index())] = None;
    }

    /// Returns the set of empty positions.
    #[must_use]
    pub fn open_positions(&self) -> PositionSet {
        Position::all()
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the positions whose filled digit differs from `solution`.
    ///
    /// Empty cells are never reported.
    #[must_use]
    pub fn mismatches(&self, solution: &Self) -> Vec<Position> {
        Position::all()
            .filter(|&pos| {
                self.get(pos)
                    .is_some_and(|digit| solution.get(pos) != Some(digit))
            })
            .collect()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitGrid({self})")
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string contains a character that is not a digit, placeholder, or
    /// whitespace.
    #[display("invalid character in grid: {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The string does not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap() as u8;
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid: DigitGrid = GRID.parse().unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered.len(), 81);
        assert_eq!(rendered.parse::<DigitGrid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_accepts_all_placeholders() {
        let dots = ".".repeat(81);
        let underscores = "_".repeat(81);
        let zeros = "0".repeat(81);
        assert_eq!(
            dots.parse::<DigitGrid>().unwrap(),
            underscores.parse::<DigitGrid>().unwrap()
        );
        assert_eq!(
            dots.parse::<DigitGrid>().unwrap(),
            zeros.parse::<DigitGrid>().unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let s = format!("x{}", ".".repeat(80));
        assert_eq!(
            s.parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert_eq!(
            ".".repeat(80).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_set_clear_and_open_positions() {
        let mut grid = DigitGrid::new();
        assert_eq!(grid.open_positions().len(), 81);

        grid.set(Position::new(4, 4), Digit::D5);
        assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D5));
        assert_eq!(grid.open_positions().len(), 80);
        assert_eq!(grid.filled_count(), 1);

        grid.clear(Position::new(4, 4));
        assert_eq!(grid.get(Position::new(4, 4)), None);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_mismatches() {
        let grid: DigitGrid = GRID.parse().unwrap();
        let mut broken = grid;
        broken.set(Position::new(0, 0), Digit::D9);
        broken.set(Position::new(2, 0), Digit::D1);

        let mut expected_solution = grid;
        expected_solution.set(Position::new(2, 0), Digit::D4);

        let mismatches = broken.mismatches(&expected_solution);
        assert_eq!(
            mismatches,
            vec![Position::new(0, 0), Position::new(2, 0)]
        );
        assert_eq!(grid.mismatches(&grid), Vec::new());
    }
}
