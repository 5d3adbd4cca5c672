//! Rows, columns, and boxes.

use std::fmt;

use crate::{Position, PositionSet};

/// A Sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = [
        Self::Row { y: 0 },
        Self::Row { y: 1 },
        Self::Row { y: 2 },
        Self::Row { y: 3 },
        Self::Row { y: 4 },
        Self::Row { y: 5 },
        Self::Row { y: 6 },
        Self::Row { y: 7 },
        Self::Row { y: 8 },
    ];

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = [
        Self::Column { x: 0 },
        Self::Column { x: 1 },
        Self::Column { x: 2 },
        Self::Column { x: 3 },
        Self::Column { x: 4 },
        Self::Column { x: 5 },
        Self::Column { x: 6 },
        Self::Column { x: 7 },
        Self::Column { x: 8 },
    ];

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = [
        Self::Box { index: 0 },
        Self::Box { index: 1 },
        Self::Box { index: 2 },
        Self::Box { index: 3 },
        Self::Box { index: 4 },
        Self::Box { index: 5 },
        Self::Box { index: 6 },
        Self::Box { index: 7 },
        Self::Box { index: 8 },
    ];

    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns all positions contained in this house.
    #[must_use]
    pub fn positions(self) -> PositionSet {
        match self {
            House::Row { y } => PositionSet::ROW_POSITIONS[usize::from(y)],
            House::Column { x } => PositionSet::COLUMN_POSITIONS[usize::from(x)],
            House::Box { index } => PositionSet::BOX_POSITIONS[usize::from(index)],
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { y } => write!(f, "row {y}"),
            House::Column { x } => write!(f, "column {x}"),
            House::Box { index } => write!(f, "box {index}"),
        }
    }
}
