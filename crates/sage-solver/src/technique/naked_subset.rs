use sage_core::{DigitSet, House, PositionSet};

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "Naked Subset";

/// A technique that removes candidates using naked subsets of size 2-8.
///
/// A "naked subset" of size N occurs when N open cells of a house together
/// hold only N distinct candidate digits. Those digits can be eliminated
/// from every other cell of the house.
///
/// Sizes are scanned in ascending order, so a pair is always reported
/// before a triple that contains it. Subsets spanning a whole house (N
/// equal to the number of open cells) are degenerate and skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSubset {}

impl NakedSubset {
    /// Creates a new `NakedSubset` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSubset {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        for size in 2..=8 {
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

    let open_mask = open.house_mask(house);
    for subset in open_mask.subsets_of_len(size) {
        let mut digits = DigitSet::EMPTY;
        for i in subset {
            digits |= grid.candidates_at(house.position_from_cell_index(i));
        }
        if digits.len() != size {
            continue;
        }

        let mut cells = PositionSet::EMPTY;
        for i in subset {
            cells.insert(house.position_from_cell_index(i));
        }
        let eliminations: PositionSet = open
            .difference(cells)
            .iter()
            .filter(|&pos| !(grid.candidates_at(pos) & digits).is_empty())
            .collect();
        if eliminations.is_empty() {
            continue;
        }

        #[expect(clippy::cast_possible_truncation)]
        hints.push(Hint::NakedSubset {
            house,
            size: size as u8,
            cells,
            digits,
            eliminations,
        });
    }
}
