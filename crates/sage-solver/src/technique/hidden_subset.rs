use sage_core::{Digit, DigitSet, House, HouseMask, PositionSet};

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "Hidden Subset";

/// A technique that trims candidates using hidden subsets of size 2-4.
///
/// A "hidden subset" of size N occurs when N digits fit only into the same
/// N open cells of a house. Those cells can hold nothing else, so their
/// other candidates are removed.
///
/// Sizes are scanned in ascending order. Subsets spanning every open cell
/// of the house are degenerate and skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSubset {}

impl HiddenSubset {
    /// Creates a new `HiddenSubset` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSubset {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        for size in 2..=4 {
            for house in House::ALL {
                find_in_house(grid, house, size, &mut hints);
            }
        }
        hints
    }
}

fn find_in_house(grid: &HintGrid, house: House, size: usize, hints: &mut Vec<Hint>) {
    let open = grid.open_in_house(house);
    if open.len() <= size {
        return;
    }

    // Digits still placeable somewhere in the house.
    let placeable: DigitSet = Digit::ALL
        .into_iter()
        .filter(|&digit| !grid.house_mask(house, digit).is_empty())
        .collect();

    for subset in placeable.subsets_of_len(size) {
        let mut cell_mask = HouseMask::EMPTY;
        for digit in subset {
            cell_mask |= grid.house_mask(house, digit);
        }
        if cell_mask.len() != size {
            continue;
        }

        let mut cells = PositionSet::EMPTY;
        let mut trimmed = DigitSet::EMPTY;
        for i in cell_mask {
            let pos = house.position_from_cell_index(i);
            cells.insert(pos);
            trimmed |= grid.candidates_at(pos).difference(subset);
        }
        if trimmed.is_empty() {
            continue;
        }

        #[expect(clippy::cast_possible_truncation)]
        hints.push(Hint::HiddenSubset {
            house,
            size: size as u8,
            cells,
            digits: subset,
            trimmed,
        });
    }
}
