//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

use crate::position_set::PositionSet;

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions also have a row-major linear index 0-80 used by
/// [`PositionSet`].
///
/// # Examples
///
/// ```
/// use sage_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 22);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All positions of each row, indexed by row.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y as usize][x as usize] = Self { x, y };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// All positions of each column, indexed by column.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x as usize][y as usize] = Self { x, y };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// All positions of each 3×3 box, indexed by box.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut index = 0;
        while index < 9 {
            let mut i = 0;
            while i < 9 {
                boxes[index as usize][i as usize] = Self::from_box(index, i);
                i += 1;
            }
            index += 1;
        }
        boxes
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from its row-major linear index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            x: index % 9,
            y: index / 9,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self {
            x: (box_index % 3) * 3 + i % 3,
            y: (box_index / 3) * 3 + i / 3,
        }
    }

    /// Returns the top-left position of a box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is out of range.
    #[must_use]
    pub const fn box_origin(box_index: u8) -> Self {
        Self::from_box(box_index, 0)
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the 20 peers of this position: every other cell sharing its
    /// row, column, or box.
    #[must_use]
    pub const fn peers(self) -> PositionSet {
        PositionSet::PEERS[self.index() as usize]
    }

    /// Returns an iterator over all 81 positions in row-major order.
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
