//! Core data structures for the sudoku-sage reasoning engine.
//!
//! This crate provides the board model and the candidate engine shared by the
//! hint detectors, the backtracking solver, and the puzzle generator.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9
//!    - [`position`]: Board position (x, y) coordinate type and peer sets
//!    - [`house`]: Rows, columns, and 3×3 boxes, the units techniques reason over
//! 2. **Index semantics and containers**
//!    - [`index`]: [`Index9`] and the semantics types mapping values to bit
//!      indices ([`DigitSemantics`], [`CellIndexSemantics`])
//!    - [`bit_set_9`]: the generic 9-bit set [`BitSet9`]
//!    - [`position_set`]: the 81-bit position set [`PositionSet`]
//! 3. **Board and candidates**
//!    - [`grid`]: [`DigitGrid`], the mutable 9×9 board of optional digits
//!    - [`candidates`]: [`CandidateGrid`], the candidate engine, derived
//!      fresh from a board snapshot rather than cached across mutations
//!
//! [`Index9`]: index::Index9
//! [`DigitSemantics`]: index::DigitSemantics
//! [`CellIndexSemantics`]: index::CellIndexSemantics
//!
//! # Examples
//!
//! ```
//! use sage_core::{CandidateGrid, Digit, DigitGrid, Position};
//!
//! let mut board = DigitGrid::new();
//! board.set(Position::new(4, 4), Digit::D5);
//!
//! // Candidates are derived fresh from the board snapshot.
//! let candidates = CandidateGrid::from_grid(&board);
//! assert!(!candidates.candidates_at(Position::new(4, 5)).contains(Digit::D5));
//! ```

pub mod bit_set_9;
pub mod candidates;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod index;
pub mod position;
pub mod position_set;

pub use self::{
    bit_set_9::BitSet9,
    candidates::{CandidateGrid, HouseMask},
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
    position_set::PositionSet,
};
