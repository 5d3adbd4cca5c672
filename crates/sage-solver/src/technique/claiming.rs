use sage_core::{Digit, House, PositionSet};

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "Claiming";

/// A technique that eliminates within a box when a line confines a digit.
///
/// The dual of [`Pointing`](super::Pointing): if every candidate cell for a
/// digit on a row or column falls inside a single box, the box's other
/// cells cannot take the digit. At least two candidate cells are required.
#[derive(Debug, Default, Clone, Copy)]
pub struct Claiming {}

impl Claiming {
    /// Creates a new `Claiming` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for Claiming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        for line in House::ROWS.into_iter().chain(House::COLUMNS) {
            for digit in Digit::ALL {
                let cells = grid.digit_positions(digit) & line.positions();
                if cells.len() < 2 {
                    continue;
                }
                let Some(box_index) = confining_box(cells) else {
                    continue;
                };
                let eliminations = grid
                    .digit_positions(digit)
                    .intersection(PositionSet::BOX_POSITIONS[usize::from(box_index)])
                    .difference(line.positions());
                if eliminations.is_empty() {
                    continue;
                }
                hints.push(Hint::Claiming {
                    line,
                    box_index,
                    digit,
                    cells,
                    eliminations,
                });
            }
        }
        hints
    }
}

/// Returns the box containing every cell of the set, if one does.
fn confining_box(cells: PositionSet) -> Option<u8> {
    let mut iter = cells.iter();
    let box_index = iter.next()?.box_index();
    iter.all(|pos| pos.box_index() == box_index)
        .then_some(box_index)
}
