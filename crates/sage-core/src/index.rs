//! Index types and semantics for 9-element containers.
//!
//! [`Index9`] is a checked bit index in the range 0-8; [`Index9Semantics`]
//! defines how user-facing values map onto those indices. The two standard
//! implementations are [`DigitSemantics`] (digits 1-9) and
//! [`CellIndexSemantics`] (cell indices 0-8 within a house).

use crate::digit::Digit;

/// A bit index in the range 0-8.
///
/// Ensures at construction time that the index is valid for a 9-element
/// container such as [`BitSet9`](crate::bit_set_9::BitSet9).
#[derive(Debug, Clone, Copy)]
pub struct Index9 {
    index: u8,
}

impl Index9 {
    /// Creates a new bit index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9);
        Self { index }
    }

    /// Returns the underlying index value (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << self.index
    }

    /// Returns an iterator over all 9 valid bit indices (0-8).
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).map(Index9::new)
    }
}

/// Defines the semantics for mapping values to indices in 9-element containers.
///
/// Implementors define how user-facing values are converted to and from
/// internal indices (0-8), letting [`BitSet9`](crate::bit_set_9::BitSet9)
/// expose a domain-typed API over a single `u16`.
pub trait Index9Semantics {
    /// The type of values that can be stored in the set.
    type Value;

    /// Converts a value to a bit index.
    ///
    /// # Panics
    ///
    /// Should panic if the value cannot be represented as a valid bit index.
    fn to_index(value: Self::Value) -> Index9;

    /// Converts a bit index back to a value.
    fn from_index(index: Index9) -> Self::Value;
}

/// Semantics for digits 1-9.
///
/// Digit 1 maps to bit 0, digit 9 to bit 8.
#[derive(Debug)]
pub struct DigitSemantics;

impl Index9Semantics for DigitSemantics {
    type Value = Digit;

    fn to_index(value: Self::Value) -> Index9 {
        Index9::new(value.value() - 1)
    }

    fn from_index(index: Index9) -> Self::Value {
        Digit::from_value(index.index() + 1)
    }
}

/// Semantics for cell indices (0-8) within a house.
///
/// A direct identity mapping, used to represent positions within a row,
/// column, or box.
///
/// # Panics
///
/// The `to_index` method panics if a value is 9 or greater.
#[derive(Debug)]
pub struct CellIndexSemantics;

impl Index9Semantics for CellIndexSemantics {
    type Value = u8;

    fn to_index(value: Self::Value) -> Index9 {
        Index9::new(value)
    }

    fn from_index(index: Index9) -> Self::Value {
        index.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_semantics_round_trip() {
        for digit in Digit::ALL {
            let index = DigitSemantics::to_index(digit);
            assert_eq!(DigitSemantics::from_index(index), digit);
        }
        assert_eq!(DigitSemantics::to_index(Digit::D1).index(), 0);
        assert_eq!(DigitSemantics::to_index(Digit::D9).index(), 8);
    }

    #[test]
    fn test_cell_index_semantics_round_trip() {
        for i in 0..9 {
            let index = CellIndexSemantics::to_index(i);
            assert_eq!(CellIndexSemantics::from_index(index), i);
        }
    }

    #[test]
    #[should_panic(expected = "index < 9")]
    fn test_index_out_of_range_panics() {
        let _ = Index9::new(9);
    }
}
