//! Puzzle generation and difficulty grading for sudoku-sage.
//!
//! A [`PuzzleGenerator`] is seeded from a [`PuzzleSeed`] and produces
//! [`Puzzle`]s that are guaranteed to have exactly one solution. The
//! [`Difficulty`] grader classifies a clue grid by replaying a
//! technique-driven solve of it.
//!
//! # Examples
//!
//! ```
//! use sage_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//! use sage_solver::backtrack;
//!
//! let seed = PuzzleSeed::from_phrase("morning coffee");
//! let mut generator = PuzzleGenerator::new(seed);
//! let puzzle = generator.generate_puzzle(45);
//!
//! assert!(backtrack::has_unique_solution(&puzzle.clues));
//! assert!(puzzle.solution.is_complete());
//! let _ = Difficulty::evaluate(&puzzle.clues);
//! ```

pub mod difficulty;
pub mod generator;
pub mod seed;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    generator::{Puzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
