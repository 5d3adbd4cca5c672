use sage_core::{Digit, House, PositionSet};

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "Pointing";

/// A technique that eliminates along a line when a box confines a digit.
///
/// If every candidate cell for a digit within a box lies on a single row or
/// column, the digit must be placed there, so it can be removed from the
/// rest of that line outside the box. At least two candidate cells are
/// required; a single cell is a hidden single, not an intersection.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pointing {}

impl Pointing {
    /// Creates a new `Pointing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for Pointing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        for box_index in 0..9 {
            let box_positions = PositionSet::BOX_POSITIONS[usize::from(box_index)];
            for digit in Digit::ALL {
                let cells = grid.digit_positions(digit) & box_positions;
                if cells.len() < 2 {
                    continue;
                }
                let Some(line) = confining_line(cells) else {
                    continue;
                };
                let eliminations = grid
                    .digit_positions(digit)
                    .intersection(line.positions())
                    .difference(box_positions);
                if eliminations.is_empty() {
                    continue;
                }
                hints.push(Hint::Pointing {
                    box_index,
                    line,
                    digit,
                    cells,
                    eliminations,
                });
            }
        }
        hints
    }
}

/// Returns the row or column containing every cell of the set, if one does.
fn confining_line(cells: PositionSet) -> Option<House> {
    let mut iter = cells.iter();
    let first = iter.next()?;
    let mut same_row = true;
    let mut same_col = true;
    for pos in iter {
        same_row &= pos.y() == first.y();
        same_col &= pos.x() == first.x();
    }
    if same_row {
        Some(House::Row { y: first.y() })
    } else if same_col {
        Some(House::Column { x: first.x() })
    } else {
        None
    }
}
