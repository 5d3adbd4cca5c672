//! Difficulty grading for clue grids.

use std::{ops::RangeInclusive, str::FromStr};

use sage_core::{CandidateGrid, DigitGrid};
use sage_solver::{HintAction, HintGrid, technique};

/// How hard a puzzle is for a human solver.
///
/// Grading looks at how many clues are missing and which techniques a
/// hint-driven solve of the board actually needs, not at how long a
/// machine takes to solve it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub enum Difficulty {
    /// Solvable with singles, intersections, and pairs.
    #[display("easy")]
    Easy,
    /// Needs mid-weight subset reasoning.
    #[display("medium")]
    Medium,
    /// Sparse boards or heavier techniques.
    #[display("hard")]
    Hard,
    /// Very sparse boards, or openings where almost nothing is forced.
    #[display("extreme")]
    Extreme,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Extreme];

    /// The hole counts the generator targets for this level.
    #[must_use]
    pub fn hole_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 30..=40,
            Self::Medium => 40..=50,
            Self::Hard => 50..=60,
            Self::Extreme => 55..=60,
        }
    }

    /// Grades a clue grid.
    ///
    /// Replays the interactive hint path: the easiest available hint is
    /// applied to a candidate snapshot, over and over, until the board is
    /// solved or no catalogued technique applies. Three measures of that
    /// solve feed the label: the summed weight of every applied hint
    /// (`score`), the heaviest applied hint (`max_tier`), and the number
    /// of applied single-placement hints (`singles`). The checks run in a
    /// fixed order, so a board matching several rules takes the first
    /// label that applies.
    #[must_use]
    pub fn evaluate(grid: &DigitGrid) -> Self {
        let holes = 81 - grid.filled_count();
        let mut candidates = CandidateGrid::from_grid(grid);
        let mut open = grid.open_positions();

        let mut score = 0;
        let mut max_tier = 0;
        let mut singles = 0;

        while !open.is_empty() {
            let snapshot = HintGrid::from_candidates(candidates.clone(), open);
            let Some(hint) = technique::first_hint(&snapshot) else {
                break;
            };
            score += hint.weight();
            max_tier = max_tier.max(hint.weight());
            if hint.is_single() {
                singles += 1;
            }
            match hint.action() {
                HintAction::Assign { pos, digit } => {
                    candidates.place(pos, digit);
                    open.remove(pos);
                }
                HintAction::Eliminate { digits, positions } => {
                    for pos in positions {
                        for digit in digits {
                            candidates.remove_candidate(pos, digit);
                        }
                    }
                }
            }
        }

        Self::classify(holes, score, max_tier, singles)
    }

    fn classify(holes: usize, score: u32, max_tier: u32, singles: usize) -> Self {
        if score >= 80 || (holes >= 50 && singles <= 3) {
            return Self::Extreme;
        }
        if singles == 0 {
            return Self::Extreme;
        }
        if holes <= 40 && max_tier <= 2 {
            return Self::Easy;
        }
        if holes <= 50 && max_tier <= 3 {
            return Self::Medium;
        }
        Self::Hard
    }
}

/// Error returned when a difficulty name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {name:?}")]
pub struct ParseDifficultyError {
    /// The unrecognized name.
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(&level.to_string()))
            .ok_or_else(|| ParseDifficultyError {
                name: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for level in Difficulty::ALL {
            assert_eq!(level.to_string().parse::<Difficulty>().unwrap(), level);
        }
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn hole_ranges_cover_sensible_spans() {
        assert_eq!(Difficulty::Easy.hole_range(), 30..=40);
        assert_eq!(Difficulty::Medium.hole_range(), 40..=50);
        assert_eq!(Difficulty::Hard.hole_range(), 50..=60);
        assert_eq!(Difficulty::Extreme.hole_range(), 55..=60);
    }

    #[test]
    fn classification_rules_apply_in_order() {
        use Difficulty::*;

        // Extreme short-circuits: heavy solve, sparse board with almost
        // no singles, or a solve that never places a single.
        assert_eq!(Difficulty::classify(32, 90, 4, 10), Extreme);
        assert_eq!(Difficulty::classify(57, 20, 5, 3), Extreme);
        assert_eq!(Difficulty::classify(20, 25, 3, 0), Extreme);

        assert_eq!(Difficulty::classify(38, 40, 2, 36), Easy);

        // A size-3 subset bumps an otherwise easy board to Medium, and
        // so does a hole count past 40.
        assert_eq!(Difficulty::classify(38, 45, 3, 30), Medium);
        assert_eq!(Difficulty::classify(48, 50, 2, 45), Medium);

        // Past 50 holes, or past tier 3, the board is Hard.
        assert_eq!(Difficulty::classify(55, 60, 2, 50), Hard);
        assert_eq!(Difficulty::classify(45, 55, 4, 40), Hard);
    }

    #[test]
    fn classic_opening_grades_hard() {
        // 51 holes with plenty of singles: too sparse for Easy or
        // Medium, far too forced for Extreme.
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        assert_eq!(Difficulty::evaluate(&grid), Difficulty::Hard);
    }

    #[test]
    fn empty_board_is_extreme() {
        // 81 holes and no applicable hints at all.
        assert_eq!(Difficulty::evaluate(&DigitGrid::new()), Difficulty::Extreme);
    }

    #[test]
    fn nearly_complete_board_is_easy() {
        let mut grid: DigitGrid = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        "
        .parse()
        .unwrap();

        // Five mutually non-peer cells, each forced to a naked single.
        for (x, y) in [(0, 0), (3, 1), (6, 2), (1, 3), (4, 4)] {
            grid.clear(sage_core::Position::new(x, y));
        }

        assert_eq!(Difficulty::evaluate(&grid), Difficulty::Easy);
    }
}
