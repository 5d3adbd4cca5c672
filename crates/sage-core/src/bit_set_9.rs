//! A generic 9-element bitset parameterized by index semantics.
//!
//! [`BitSet9`] stores up to 9 values in a single `u16`, with bits 0-8 in
//! use. The [`Index9Semantics`] parameter defines which user-facing values
//! the bits stand for, so the same container backs both
//! [`DigitSet`](crate::digit_set::DigitSet) (digits 1-9) and
//! [`HouseMask`](crate::candidates::HouseMask) (cell indices 0-8).

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::index::{Index9, Index9Semantics};

const MASK: u16 = 0x1FF;

/// A set of up to 9 values, represented as a 9-bit mask.
///
/// Set operations (union, intersection, difference, size) are single integer
/// instructions, which matters in the technique-detection hot loops where
/// these sets are combined thousands of times per scan.
pub struct BitSet9<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S> BitSet9<S> {
    /// The empty set.
    pub const EMPTY: Self = Self::from_bits(0);

    /// The set containing all 9 values.
    pub const FULL: Self = Self::from_bits(MASK);

    /// Creates a new, empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        debug_assert!(bits & !MASK == 0);
        Self {
            bits,
            _semantics: PhantomData,
        }
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns `true` if every value of `other` is also in `self`.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns an iterator over all subsets of this set containing exactly
    /// `len` values.
    ///
    /// Used by the subset detectors to enumerate size-n cell/digit
    /// combinations within a house; the worst case is C(9,4) = 126 subsets.
    #[must_use]
    pub fn subsets_of_len(self, len: usize) -> SubsetsOfLen<S> {
        SubsetsOfLen {
            superset: self.bits,
            len,
            next: 0,
            _semantics: PhantomData,
        }
    }
}

impl<S: Index9Semantics> BitSet9<S> {
    /// Creates a set containing a single value.
    #[must_use]
    pub fn from_elem(value: S::Value) -> Self {
        Self::from_bits(S::to_index(value).bit())
    }

    /// Inserts a value into the set.
    pub fn insert(&mut self, value: S::Value) {
        self.bits |= S::to_index(value).bit();
    }

    /// Removes a value from the set.
    pub fn remove(&mut self, value: S::Value) {
        self.bits &= !S::to_index(value).bit();
    }

    /// Returns `true` if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: S::Value) -> bool {
        self.bits & S::to_index(value).bit() != 0
    }

    /// Returns the sole value if the set has exactly one element.
    #[must_use]
    pub fn as_single(self) -> Option<S::Value> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Returns both values, in ascending index order, if the set has exactly
    /// two elements.
    #[must_use]
    pub fn as_double(self) -> Option<(S::Value, S::Value)> {
        if self.len() == 2 {
            let mut iter = self.iter();
            Some((iter.next()?, iter.next()?))
        } else {
            None
        }
    }

    /// Returns an iterator over the values in ascending index order.
    #[must_use]
    pub fn iter(&self) -> Iter<S> {
        Iter {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> Default for BitSet9<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for BitSet9<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BitSet9<S> {}

impl<S> PartialEq for BitSet9<S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S> Eq for BitSet9<S> {}

impl<S> PartialOrd for BitSet9<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for BitSet9<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl<S> Hash for BitSet9<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<S> fmt::Debug for BitSet9<S>
where
    S: Index9Semantics,
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S> BitAnd for BitSet9<S> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<S> BitAndAssign for BitSet9<S> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl<S> BitOr for BitSet9<S> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<S> BitOrAssign for BitSet9<S> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<S> Not for BitSet9<S> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits(!self.bits & MASK)
    }
}

impl<S: Index9Semantics> FromIterator<S::Value> for BitSet9<S> {
    fn from_iter<I: IntoIterator<Item = S::Value>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<S: Index9Semantics> IntoIterator for BitSet9<S> {
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Index9Semantics> IntoIterator for &BitSet9<S> {
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`BitSet9`], in ascending index order.
#[derive(Debug, Clone)]
pub struct Iter<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S: Index9Semantics> Iterator for Iter<S> {
    type Item = S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = Index9::new(self.bits.trailing_zeros() as u8);
        self.bits &= self.bits - 1;
        Some(S::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S: Index9Semantics> FusedIterator for Iter<S> {}
impl<S: Index9Semantics> ExactSizeIterator for Iter<S> {}

/// Iterator over all size-`len` subsets of a [`BitSet9`].
#[derive(Debug, Clone)]
pub struct SubsetsOfLen<S> {
    superset: u16,
    len: usize,
    next: u16,
    _semantics: PhantomData<S>,
}

impl<S> Iterator for SubsetsOfLen<S> {
    type Item = BitSet9<S>;

    fn next(&mut self) -> Option<Self::Item> {
        // Scans the 2^9 possible masks, keeping submasks of the superset.
        while self.next <= MASK {
            let mask = self.next;
            self.next += 1;
            if mask & !self.superset == 0 && mask.count_ones() as usize == self.len {
                return Some(BitSet9::from_bits(mask));
            }
        }
        None
    }
}

impl<S> FusedIterator for SubsetsOfLen<S> {}
