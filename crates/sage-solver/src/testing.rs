//! Test harness for hint detectors.
//!
//! [`HintTester`] drives a single detector against a fixed grid and asserts
//! on the hints it reports:
//!
//! ```
//! use sage_core::{Digit, Position};
//! use sage_solver::{technique::NakedSingle, testing::HintTester};
//!
//! HintTester::from_str(
//!     "
//!     12345678_
//!     _________
//!     _________
//!     _________
//!     _________
//!     _________
//!     _________
//!     _________
//!     _________
//!     ",
//! )
//! .detect(&NakedSingle::new())
//! .assert_assigns(Position::new(8, 0), Digit::D9);
//! ```

use std::str::FromStr as _;

use sage_core::{CandidateGrid, Digit, DigitGrid, Position, PositionSet};

use crate::{Hint, HintAction, HintGrid, Technique};

/// A fluent harness for asserting detector output.
///
/// All assertion methods return `self` for chaining and panic with detailed
/// messages on failure, using `#[track_caller]` to report the correct
/// source location.
#[derive(Debug)]
pub struct HintTester {
    grid: HintGrid,
    hints: Vec<Hint>,
}

impl HintTester {
    /// Creates a tester over an explicit candidate state.
    ///
    /// Every cell is treated as open; this is the entry point for tests
    /// that sculpt candidates directly instead of placing digits.
    pub fn new(candidates: CandidateGrid) -> Self {
        Self {
            grid: HintGrid::from_candidates(candidates, PositionSet::FULL),
            hints: Vec::new(),
        }
    }

    /// Creates a tester from a grid string.
    ///
    /// The string format matches [`DigitGrid::from_str`]:
    /// - Digits 1-9 represent filled cells
    /// - `.`, `_`, or `0` represent empty cells
    /// - Whitespace is ignored
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let board = DigitGrid::from_str(s).unwrap();
        Self {
            grid: HintGrid::from_grid(&board),
            hints: Vec::new(),
        }
    }

    /// Runs a detector and stores its hints for the assertions that follow.
    pub fn detect<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        self.hints = technique.find_hints(&self.grid);
        self
    }

    /// Consumes the tester and returns the detected hints.
    pub fn into_hints(self) -> Vec<Hint> {
        self.hints
    }

    /// Asserts that some hint assigns `digit` to `pos`.
    #[track_caller]
    pub fn assert_assigns(self, pos: Position, digit: Digit) -> Self {
        let found = self.hints.iter().any(|hint| {
            hint.action()
                == HintAction::Assign {
                    pos,
                    digit,
                }
        });
        assert!(
            found,
            "expected an assignment of {digit} at {pos}, got hints: {:#?}",
            self.hints
        );
        self
    }

    /// Asserts that some hint eliminates `digit` from `pos`.
    #[track_caller]
    pub fn assert_eliminates(self, pos: Position, digit: Digit) -> Self {
        let found = self.hints.iter().any(|hint| match hint.action() {
            HintAction::Eliminate { digits, positions } => {
                digits.contains(digit) && positions.contains(pos)
            }
            HintAction::Assign { .. } => false,
        });
        assert!(
            found,
            "expected an elimination of {digit} at {pos}, got hints: {:#?}",
            self.hints
        );
        self
    }

    /// Asserts that the detector reported nothing.
    #[track_caller]
    pub fn assert_no_hints(self) -> Self {
        assert!(
            self.hints.is_empty(),
            "expected no hints, got: {:#?}",
            self.hints
        );
        self
    }

    /// Asserts the exact number of reported hints.
    #[track_caller]
    pub fn assert_hint_count(self, expected: usize) -> Self {
        assert_eq!(
            self.hints.len(),
            expected,
            "unexpected hint count, got: {:#?}",
            self.hints
        );
        self
    }
}
