//! Example demonstrating seeded puzzle generation.
//!
//! Generates a puzzle, prints the clue grid, its solution, its grade, and
//! the seed that reproduces it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a previous run from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex digits>
//! ```
//!
//! Ask for a fixed number of holes instead of a difficulty level:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --holes 55
//! ```
//!
//! Ask for a difficulty level (easy, medium, hard, extreme):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --level hard
//! ```
//!
//! Set `RUST_LOG=debug` to watch the per-attempt grading.

use clap::Parser;
use sage_core::DigitGrid;
use sage_generator::{Difficulty, Puzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex digits. A random seed is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Exact number of holes to carve. Overrides --level.
    #[arg(long, value_name = "COUNT")]
    holes: Option<usize>,

    /// Difficulty level to target.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    level: Difficulty,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let mut generator = PuzzleGenerator::new(seed);

    let (puzzle, grade) = match args.holes {
        Some(holes) => {
            let puzzle = generator.generate_puzzle(holes);
            let grade = Difficulty::evaluate(&puzzle.clues);
            (puzzle, grade)
        }
        None => generator.generate_by_level(args.level),
    };

    print_puzzle(seed, &puzzle, grade);
}

fn print_puzzle(seed: PuzzleSeed, puzzle: &Puzzle, grade: Difficulty) {
    println!("Seed:");
    println!("  {seed}");
    println!();

    println!("Puzzle ({} holes, {grade}):", puzzle.holes());
    print_grid(&puzzle.clues);
    println!();

    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &DigitGrid) {
    let text = grid.to_string();
    for row in 0..9 {
        println!("  {}", &text[row * 9..(row + 1) * 9]);
    }
}
