use sage_core::{Digit, House};

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "Hidden Single";

/// A technique that fills the only cell of a house that can take a digit.
///
/// The digit may still have several candidates at that cell; the house
/// forces the placement regardless.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        for house in House::ALL {
            for digit in Digit::ALL {
                let mask = grid.house_mask(house, digit);
                if let Some(i) = mask.as_single() {
                    let pos = house.position_from_cell_index(i);
                    // A lone candidate in its cell is a naked single, not a
                    // hidden one.
                    if grid.candidates_at(pos).len() > 1 {
                        hints.push(Hint::HiddenSingle { house, pos, digit });
                    }
                }
            }
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use sage_core::Position;

    use super::*;
    use crate::testing::HintTester;

    #[test]
    fn test_digit_forced_into_row_cell() {
        // Columns 0-7 each carry a 5 outside row 4, so in row 4 the digit
        // fits only at (8, 4).
        HintTester::from_str(
            "
            5________
            ___5_____
            ______5__
            _____5___
            _________
            _5_______
            ____5____
            _______5_
            __5______
            ",
        )
        .detect(&HiddenSingle::new())
        .assert_assigns(Position::new(8, 4), Digit::D5);
    }

    #[test]
    fn test_no_hints_on_empty_board() {
        HintTester::from_str(&".".repeat(81))
            .detect(&HiddenSingle::new())
            .assert_no_hints();
    }
}
