//! Seeded puzzle construction.

use log::{debug, warn};
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use sage_core::{Digit, DigitGrid, DigitSet, Position};
use sage_solver::backtrack;

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle: the clue grid handed to the player and the full
/// grid it was carved from.
///
/// Every puzzle produced by [`PuzzleGenerator`] has exactly one solution,
/// and that solution is `solution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    /// The clue grid.
    pub clues: DigitGrid,
    /// The unique completion of `clues`.
    pub solution: DigitGrid,
}

impl Puzzle {
    /// Number of empty cells in the clue grid.
    #[must_use]
    pub fn holes(&self) -> usize {
        81 - self.clues.filled_count()
    }
}

/// Deterministic puzzle generator.
///
/// All randomness comes from a [`Pcg64`] stream seeded by a
/// [`PuzzleSeed`], so the same seed always yields the same sequence of
/// puzzles.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    seed: PuzzleSeed,
    rng: Pcg64,
}

impl PuzzleGenerator {
    /// Creates a generator whose output is determined by `seed`.
    #[must_use]
    pub fn new(seed: PuzzleSeed) -> Self {
        Self {
            seed,
            rng: Pcg64::from_seed(seed.as_bytes()),
        }
    }

    /// Returns the seed this generator was built from.
    #[must_use]
    pub const fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Produces a complete valid grid by randomized backtracking.
    ///
    /// Cells are filled in scan order with a freshly shuffled candidate
    /// order per cell, undoing placements on dead ends. Every complete
    /// grid is reachable this way.
    pub fn generate_solution(&mut self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        let filled = fill_from(&mut grid, 0, &mut self.rng);
        debug_assert!(filled);
        grid
    }

    /// Carves a puzzle with up to `target_holes` empty cells.
    ///
    /// Visits all 81 cells in random order and clears each one only if
    /// the board still has a unique solution afterwards, stopping once
    /// `target_holes` is reached. If fewer cells can be removed without
    /// breaking uniqueness, the puzzle simply has fewer holes.
    pub fn generate_puzzle(&mut self, target_holes: usize) -> Puzzle {
        let solution = self.generate_solution();
        let mut clues = solution;

        let mut order: Vec<Position> = Position::all().collect();
        order.shuffle(&mut self.rng);

        let mut holes = 0;
        for pos in order {
            if holes == target_holes {
                break;
            }
            let Some(digit) = clues.get(pos) else {
                continue;
            };
            clues.clear(pos);
            if backtrack::has_unique_solution(&clues) {
                holes += 1;
            } else {
                clues.set(pos, digit);
            }
        }

        Puzzle { clues, solution }
    }

    /// Generates a puzzle classified at `level`.
    ///
    /// Draws a target hole count uniformly from the level's range,
    /// carves a puzzle, and grades it, retrying until the grade matches.
    /// The grade the puzzle actually earned is returned with it; after
    /// 500 attempts the last puzzle is returned with its mismatching
    /// grade rather than failing, so callers needing a strict match must
    /// compare the returned grade against the requested one.
    pub fn generate_by_level(&mut self, level: Difficulty) -> (Puzzle, Difficulty) {
        const MAX_ATTEMPTS: u32 = 500;

        let range = level.hole_range();
        let mut attempt = 0;
        loop {
            attempt += 1;
            let target = self.rng.random_range(range.clone());
            let puzzle = self.generate_puzzle(target);
            let actual = Difficulty::evaluate(&puzzle.clues);
            debug!("attempt {attempt}: {target} target holes, graded {actual}");
            if actual == level {
                return (puzzle, actual);
            }
            if attempt == MAX_ATTEMPTS {
                warn!(
                    "no {level} puzzle within {MAX_ATTEMPTS} attempts, returning a {actual} one"
                );
                return (puzzle, actual);
            }
        }
    }
}

fn candidates(grid: &DigitGrid, pos: Position) -> DigitSet {
    let mut digits = DigitSet::FULL;
    for peer in pos.peers() {
        if let Some(digit) = grid.get(peer) {
            digits.remove(digit);
        }
    }
    digits
}

fn fill_from(grid: &mut DigitGrid, index: u8, rng: &mut Pcg64) -> bool {
    if index == 81 {
        return true;
    }
    let pos = Position::from_index(index);

    let mut digits: Vec<Digit> = candidates(grid, pos).iter().collect();
    digits.shuffle(rng);

    for digit in digits {
        grid.set(pos, digit);
        if fill_from(grid, index + 1, rng) {
            return true;
        }
    }
    grid.clear(pos);
    false
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn generator(tag: &str) -> PuzzleGenerator {
        PuzzleGenerator::new(PuzzleSeed::from_phrase(tag))
    }

    fn grid_is_valid_solution(grid: &DigitGrid) -> bool {
        grid.is_complete()
            && Position::all().all(|pos| {
                let Some(digit) = grid.get(pos) else {
                    return false;
                };
                pos.peers().into_iter().all(|peer| grid.get(peer) != Some(digit))
            })
    }

    #[test]
    fn generated_solution_is_complete_and_valid() {
        let grid = generator("solution").generate_solution();
        assert!(grid_is_valid_solution(&grid));
    }

    #[test]
    fn same_seed_same_output() {
        let a = generator("replay").generate_puzzle(45);
        let b = generator("replay").generate_puzzle(45);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generator("left").generate_solution();
        let b = generator("right").generate_solution();
        assert_ne!(a, b);
    }

    #[test]
    fn puzzle_is_unique_and_matches_its_solution() {
        let puzzle = generator("carve").generate_puzzle(50);

        assert!(backtrack::has_unique_solution(&puzzle.clues));
        assert!(grid_is_valid_solution(&puzzle.solution));
        assert_eq!(backtrack::solve(&puzzle.clues), Some(puzzle.solution));
        assert!(puzzle.clues.mismatches(&puzzle.solution).is_empty());
    }

    #[test]
    fn zero_target_keeps_the_full_grid() {
        let puzzle = generator("intact").generate_puzzle(0);
        assert_eq!(puzzle.holes(), 0);
        assert_eq!(puzzle.clues, puzzle.solution);
    }

    #[test]
    fn generate_by_level_hits_the_requested_grade() {
        let mut generator = generator("leveled");
        let (puzzle, actual) = generator.generate_by_level(Difficulty::Easy);

        assert!(backtrack::has_unique_solution(&puzzle.clues));
        assert!(puzzle.holes() <= 40);
        assert_eq!(actual, Difficulty::Easy);
        assert_eq!(Difficulty::evaluate(&puzzle.clues), actual);
    }

    #[test]
    fn generate_by_level_reports_the_actual_grade() {
        // Whatever the request, the returned label is the grade the
        // returned clue grid earns.
        let mut generator = generator("labeled");
        let (puzzle, actual) = generator.generate_by_level(Difficulty::Medium);
        assert_eq!(Difficulty::evaluate(&puzzle.clues), actual);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn carved_puzzles_stay_unique(bytes in any::<[u8; 32]>(), target in 0_usize..=60) {
            let mut generator = PuzzleGenerator::new(PuzzleSeed::from_bytes(bytes));
            let puzzle = generator.generate_puzzle(target);

            prop_assert!(puzzle.holes() <= target);
            prop_assert!(backtrack::has_unique_solution(&puzzle.clues));
            prop_assert!(puzzle.clues.mismatches(&puzzle.solution).is_empty());
        }
    }
}
