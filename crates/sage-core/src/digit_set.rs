//! Candidate digits (1-9) for a single cell.
//!
//! [`DigitSet`] specializes [`BitSet9`] with [`DigitSemantics`], mapping
//! digits 1-9 to bits 0-8. It is the fixed-width replacement for a per-cell
//! set of digits: union, intersection, and size are single integer
//! operations in the technique-detection hot loops.
//!
//! # Examples
//!
//! ```
//! use sage_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert!(candidates.contains(Digit::D1));
//! ```

use crate::{bit_set_9::BitSet9, index::DigitSemantics};

/// A set of candidate digits (1-9) for a single cell.
pub type DigitSet = BitSet9<DigitSemantics>;
