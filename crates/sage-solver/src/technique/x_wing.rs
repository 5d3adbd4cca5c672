use sage_core::{Digit, Position, PositionSet};
use tinyvec::ArrayVec;

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "X-Wing";

/// A technique that removes candidates using an X-Wing pattern.
///
/// An "X-Wing" occurs when a digit appears exactly twice in each of two rows
/// and those candidate cells align on the same two columns (or the column
/// dual). One of each aligned pair must hold the digit, so it can be removed
/// from the rest of the two cover lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing {}

impl XWing {
    /// Creates a new `XWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for XWing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        for digit in Digit::ALL {
            find_with_base(grid, digit, true, &mut hints);
            find_with_base(grid, digit, false, &mut hints);
        }
        hints
    }
}

fn find_with_base(grid: &HintGrid, digit: Digit, base_rows: bool, hints: &mut Vec<Hint>) {
    let mut lines: ArrayVec<[(u8, (u8, u8)); 9]> = ArrayVec::new();
    for line in 0..9 {
        let mask = if base_rows {
            grid.row_mask(line, digit)
        } else {
            grid.col_mask(line, digit)
        };
        if let Some(covers) = mask.as_double() {
            lines.push((line, covers));
        }
    }

    for (i, &(line1, covers1)) in lines.iter().enumerate() {
        for &(line2, covers2) in &lines[i + 1..] {
            if covers1 != covers2 {
                continue;
            }
            let (c1, c2) = covers1;
            let cover_positions = cover(base_rows, c1) | cover(base_rows, c2);
            let base_positions = base(base_rows, line1) | base(base_rows, line2);
            let eliminations = grid
                .digit_positions(digit)
                .intersection(cover_positions)
                .difference(base_positions);
            if eliminations.is_empty() {
                continue;
            }
            hints.push(Hint::XWing {
                digit,
                base_rows,
                lines: (line1, line2),
                covers: covers1,
                corners: corners(base_rows, (line1, line2), covers1),
                eliminations,
            });
        }
    }
}

fn base(base_rows: bool, line: u8) -> PositionSet {
    if base_rows {
        PositionSet::ROW_POSITIONS[usize::from(line)]
    } else {
        PositionSet::COLUMN_POSITIONS[usize::from(line)]
    }
}

fn cover(base_rows: bool, line: u8) -> PositionSet {
    // Cover lines run perpendicular to the base lines.
    base(!base_rows, line)
}

fn corners(base_rows: bool, lines: (u8, u8), covers: (u8, u8)) -> PositionSet {
    let at = |line, cover| {
        if base_rows {
            Position::new(cover, line)
        } else {
            Position::new(line, cover)
        }
    };
    PositionSet::from_iter([
        at(lines.0, covers.0),
        at(lines.0, covers.1),
        at(lines.1, covers.0),
        at(lines.1, covers.1),
    ])
}
