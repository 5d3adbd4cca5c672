use sage_core::PositionSet;

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "XY-Wing";

/// A technique that removes a digit seen by all three cells of an XY-Wing.
///
/// A bivalue pivot cell {x, y} with two bivalue peer cells {x, z} and
/// {y, z} forces z into one of the wings whichever way the pivot resolves,
/// so z can be removed from the cells that are peers of the pivot and of
/// both wings.
///
/// Wing pairs sharing no third digit, or sharing more than one digit with
/// each other, do not form the pattern and are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct XyWing {}

impl XyWing {
    /// Creates a new `XyWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for XyWing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        let bivalues: PositionSet = grid
            .open()
            .iter()
            .filter(|&pos| grid.candidates_at(pos).len() == 2)
            .collect();

        for pivot in bivalues {
            let pivot_digits = grid.candidates_at(pivot);
            let wing_cells: Vec<_> = (bivalues & pivot.peers()).iter().collect();

            for (i, &wing1) in wing_cells.iter().enumerate() {
                let candidates1 = grid.candidates_at(wing1);
                let shared1 = candidates1 & pivot_digits;
                let extra1 = candidates1.difference(pivot_digits);
                if shared1.len() != 1 || extra1.len() != 1 {
                    continue;
                }

                for &wing2 in &wing_cells[i + 1..] {
                    let candidates2 = grid.candidates_at(wing2);
                    let shared2 = candidates2 & pivot_digits;
                    if shared2.len() != 1 || shared1 == shared2 {
                        continue;
                    }
                    if candidates2.difference(pivot_digits) != extra1 {
                        continue;
                    }
                    let Some(digit) = extra1.as_single() else {
                        continue;
                    };

                    let eliminations = grid.digit_positions(digit)
                        & pivot.peers()
                        & wing1.peers()
                        & wing2.peers();
                    if eliminations.is_empty() {
                        continue;
                    }
                    hints.push(Hint::XyWing {
                        pivot,
                        wings: (wing1, wing2),
                        pivot_digits,
                        digit,
                        eliminations,
                    });
                }
            }
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use sage_core::{CandidateGrid, Digit, DigitSet, Position};

    use super::*;
    use crate::testing::HintTester;

    fn restrict(grid: &mut CandidateGrid, pos: Position, keep: DigitSet) {
        for digit in Digit::ALL {
            if !keep.contains(digit) {
                grid.remove_candidate(pos, digit);
            }
        }
    }

    #[test]
    fn test_wings_remove_shared_digit_from_common_peers() {
        let mut grid = CandidateGrid::new();
        let pivot = Position::new(0, 0);
        let wing1 = Position::new(1, 0);
        let wing2 = Position::new(0, 1);

        restrict(&mut grid, pivot, DigitSet::from_iter([Digit::D1, Digit::D2]));
        restrict(&mut grid, wing1, DigitSet::from_iter([Digit::D1, Digit::D3]));
        restrict(&mut grid, wing2, DigitSet::from_iter([Digit::D2, Digit::D3]));

        // (1, 1) sees the pivot and both wings.
        HintTester::new(grid)
            .detect(&XyWing::new())
            .assert_eliminates(Position::new(1, 1), Digit::D3);
    }

    #[test]
    fn test_cells_outside_the_pivot_sight_are_kept() {
        // Wings on the pivot's row and column: their only shared peer
        // besides the pivot is (4, 4), which the pivot cannot see, so
        // nothing may be eliminated there and no hint is produced.
        let mut grid = CandidateGrid::new();
        restrict(
            &mut grid,
            Position::new(0, 0),
            DigitSet::from_iter([Digit::D1, Digit::D2]),
        );
        restrict(
            &mut grid,
            Position::new(4, 0),
            DigitSet::from_iter([Digit::D1, Digit::D3]),
        );
        restrict(
            &mut grid,
            Position::new(0, 4),
            DigitSet::from_iter([Digit::D2, Digit::D3]),
        );

        HintTester::new(grid)
            .detect(&XyWing::new())
            .assert_no_hints();
    }

    #[test]
    fn test_wings_sharing_both_pivot_digits_are_skipped() {
        // Both wings repeat the pivot's candidates; no third digit exists.
        let mut grid = CandidateGrid::new();
        let pair = DigitSet::from_iter([Digit::D1, Digit::D2]);
        restrict(&mut grid, Position::new(0, 0), pair);
        restrict(&mut grid, Position::new(4, 0), pair);
        restrict(&mut grid, Position::new(0, 4), pair);

        HintTester::new(grid)
            .detect(&XyWing::new())
            .assert_no_hints();
    }

    #[test]
    fn test_wings_with_different_extras_are_skipped() {
        // {1, 3} and {2, 4} share no z digit.
        let mut grid = CandidateGrid::new();
        restrict(
            &mut grid,
            Position::new(0, 0),
            DigitSet::from_iter([Digit::D1, Digit::D2]),
        );
        restrict(
            &mut grid,
            Position::new(4, 0),
            DigitSet::from_iter([Digit::D1, Digit::D3]),
        );
        restrict(
            &mut grid,
            Position::new(0, 4),
            DigitSet::from_iter([Digit::D2, Digit::D4]),
        );

        HintTester::new(grid)
            .detect(&XyWing::new())
            .assert_no_hints();
    }

    #[test]
    fn test_no_hints_on_empty_board() {
        HintTester::from_str(&".".repeat(81))
            .detect(&XyWing::new())
            .assert_no_hints();
    }
}
