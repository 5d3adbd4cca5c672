//! Hint detection and backtracking search for sudoku-sage.
//!
//! This crate provides two independent ways of reasoning about a board:
//!
//! 1. **Techniques** ([`technique`]): human-style deductions (singles,
//!    subsets, intersections, fish, XY-Wing). Each detector reads a
//!    [`HintGrid`] snapshot and reports every [`Hint`] it can justify,
//!    without mutating anything.
//! 2. **Backtracking** ([`backtrack`]): a fast exhaustive search used to
//!    solve boards outright and to verify solution uniqueness.
//!
//! # Examples
//!
//! ```
//! use sage_core::DigitGrid;
//! use sage_solver::{backtrack, technique};
//!
//! let board: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! assert!(backtrack::has_unique_solution(&board));
//! assert!(!technique::all_hints(&board).is_empty());
//! ```

pub mod backtrack;
pub mod hint;
pub mod hint_grid;
pub mod technique;
pub mod testing;

pub use self::{
    hint::{Hint, HintAction},
    hint_grid::HintGrid,
    technique::{BoxedTechnique, Technique},
};
