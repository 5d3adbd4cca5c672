use sage_core::{Digit, HouseMask, PositionSet};
use tinyvec::ArrayVec;

use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "Swordfish";

/// A technique that removes candidates using a Swordfish pattern.
///
/// The three-line extension of [`XWing`](super::XWing): if a digit appears
/// in two or three cells of each of three rows and those cells span exactly
/// three columns in total (or the column dual), the digit can be removed
/// from those columns outside the three rows.
#[derive(Debug, Default, Clone, Copy)]
pub struct Swordfish {}

impl Swordfish {
    /// Creates a new `Swordfish` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for Swordfish {
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
    let mut lines: ArrayVec<[(u8, HouseMask); 9]> = ArrayVec::new();
    for line in 0..9 {
        let mask = if base_rows {
            grid.row_mask(line, digit)
        } else {
            grid.col_mask(line, digit)
        };
        if (2..=3).contains(&mask.len()) {
            lines.push((line, mask));
        }
    }
    if lines.len() < 3 {
        return;
    }

    for (i, &(line1, mask1)) in lines.iter().enumerate() {
        for (j, &(line2, mask2)) in lines.iter().enumerate().skip(i + 1) {
            for &(line3, mask3) in &lines[j + 1..] {
                let union = mask1 | mask2 | mask3;
                if union.len() != 3 {
                    continue;
                }

                let mut covers = [0; 3];
                let mut cover_positions = PositionSet::EMPTY;
                for (slot, cover) in covers.iter_mut().zip(union) {
                    *slot = cover;
                    cover_positions |= base(!base_rows, cover);
                }
                let base_positions =
                    base(base_rows, line1) | base(base_rows, line2) | base(base_rows, line3);
                let eliminations = grid
                    .digit_positions(digit)
                    .intersection(cover_positions)
                    .difference(base_positions);
                if eliminations.is_empty() {
                    continue;
                }
                hints.push(Hint::Swordfish {
                    digit,
                    base_rows,
                    lines: [line1, line2, line3],
                    covers,
                    eliminations,
                });
            }
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

#[cfg(test)]
mod tests {
    use sage_core::{CandidateGrid, Position};

    use super::*;
    use crate::testing::HintTester;

    fn confine_rows(grid: &mut CandidateGrid, digit: Digit, rows: [u8; 3], columns: [u8; 3]) {
        for &y in &rows {
            for x in 0..9 {
                if !columns.contains(&x) {
                    grid.remove_candidate(Position::new(x, y), digit);
                }
            }
        }
    }

    #[test]
    fn test_eliminates_from_cover_columns() {
        let mut grid = CandidateGrid::new();
        confine_rows(&mut grid, Digit::D1, [0, 4, 8], [1, 4, 7]);

        HintTester::new(grid)
            .detect(&Swordfish::new())
            .assert_eliminates(Position::new(1, 2), Digit::D1)
            .assert_eliminates(Position::new(4, 3), Digit::D1)
            .assert_eliminates(Position::new(7, 6), Digit::D1);
    }

    #[test]
    fn test_two_candidate_lines_participate() {
        // Row 4 holds the digit in only two of the three cover columns.
        let mut grid = CandidateGrid::new();
        confine_rows(&mut grid, Digit::D5, [0, 4, 8], [1, 4, 7]);
        grid.remove_candidate(Position::new(4, 4), Digit::D5);

        HintTester::new(grid)
            .detect(&Swordfish::new())
            .assert_eliminates(Position::new(7, 2), Digit::D5);
    }

    #[test]
    fn test_no_hint_when_union_spans_four_columns() {
        // Rows 0 and 4 sit on columns {1, 4, 7} but row 8 sits on
        // {1, 4, 8}, a four-column union.
        let mut grid = CandidateGrid::new();
        for y in [0, 4] {
            for x in 0..9 {
                if x != 1 && x != 4 && x != 7 {
                    grid.remove_candidate(Position::new(x, y), Digit::D1);
                }
            }
        }
        for x in 0..9 {
            if x != 1 && x != 4 && x != 8 {
                grid.remove_candidate(Position::new(x, 8), Digit::D1);
            }
        }

        HintTester::new(grid)
            .detect(&Swordfish::new())
            .assert_no_hints();
    }

    #[test]
    fn test_no_hints_on_empty_board() {
        HintTester::from_str(&".".repeat(81))
            .detect(&Swordfish::new())
            .assert_no_hints();
    }
}
