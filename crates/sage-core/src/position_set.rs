//! An 81-bit set of board positions.
//!
//! [`PositionSet`] tracks a subset of the 81 cells in a single `u128`,
//! indexed row-major. It is the board-wide counterpart of
//! [`BitSet9`](crate::bit_set_9::BitSet9): every technique detector and the
//! candidate engine combine these sets with bitwise operations instead of
//! iterating cell lists.
//!
//! # Examples
//!
//! ```
//! use sage_core::{Position, PositionSet};
//!
//! let mut set = PositionSet::ROW_POSITIONS[0];
//! set.remove(Position::new(4, 0));
//!
//! assert_eq!(set.len(), 8);
//! assert!(set.contains(Position::new(0, 0)));
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::{
    candidates::HouseMask,
    house::House,
    position::Position,
};

const MASK: u128 = (1 << 81) - 1;

const fn bit(x: u8, y: u8) -> u128 {
    1 << (y as u32 * 9 + x as u32)
}

const fn row_bits(y: u8) -> u128 {
    0x1FF << (y as u32 * 9)
}

const fn column_bits(x: u8) -> u128 {
    let mut bits = 0;
    let mut y = 0;
    while y < 9 {
        bits |= bit(x, y);
        y += 1;
    }
    bits
}

const fn box_bits(index: u8) -> u128 {
    let mut bits = 0;
    let mut i = 0;
    while i < 9 {
        let pos = Position::from_box(index, i);
        bits |= bit(pos.x(), pos.y());
        i += 1;
    }
    bits
}

/// A set of positions across the board, represented as an 81-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet {
    bits: u128,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 positions.
    pub const FULL: Self = Self { bits: MASK };

    /// The positions of each row, indexed by row.
    pub const ROW_POSITIONS: [Self; 9] = {
        let mut rows = [Self::EMPTY; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self { bits: row_bits(y) };
            y += 1;
        }
        rows
    };

    /// The positions of each column, indexed by column.
    pub const COLUMN_POSITIONS: [Self; 9] = {
        let mut columns = [Self::EMPTY; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self {
                bits: column_bits(x),
            };
            x += 1;
        }
        columns
    };

    /// The positions of each 3×3 box, indexed by box.
    pub const BOX_POSITIONS: [Self; 9] = {
        let mut boxes = [Self::EMPTY; 9];
        let mut index = 0;
        while index < 9 {
            boxes[index as usize] = Self {
                bits: box_bits(index),
            };
            index += 1;
        }
        boxes
    };

    /// The peer set of each position (row ∪ column ∪ box, minus the position
    /// itself), indexed by linear position index.
    pub const PEERS: [Self; 81] = {
        let mut peers = [Self::EMPTY; 81];
        let mut index = 0;
        while index < 81 {
            let pos = Position::from_index(index);
            let bits = (row_bits(pos.y()) | column_bits(pos.x()) | box_bits(pos.box_index()))
                & !bit(pos.x(), pos.y());
            peers[index as usize] = Self { bits };
            index += 1;
        }
        peers
    };

    /// Creates a new, empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single position.
    #[must_use]
    pub const fn from_elem(pos: Position) -> Self {
        Self {
            bits: bit(pos.x(), pos.y()),
        }
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no positions.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Inserts a position into the set.
    pub const fn insert(&mut self, pos: Position) {
        self.bits |= bit(pos.x(), pos.y());
    }

    /// Removes a position from the set.
    pub const fn remove(&mut self, pos: Position) {
        self.bits &= !bit(pos.x(), pos.y());
    }

    /// Returns `true` if the set contains the position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & bit(pos.x(), pos.y()) != 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the positions in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns `true` if every position of `other` is also in `self`.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns the sole position if the set has exactly one element.
    #[must_use]
    pub fn as_single(self) -> Option<Position> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Projects this set onto a house, as a mask of cell indices (0-8)
    /// within that house.
    #[must_use]
    pub fn house_mask(self, house: House) -> HouseMask {
        let mut mask = HouseMask::new();
        for i in 0..9 {
            if self.contains(house.position_from_cell_index(i)) {
                mask.insert(i);
            }
        }
        mask
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Default for PositionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitAnd for PositionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for PositionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl Not for PositionSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & MASK,
        }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`], in row-major order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = PositionSet::new();
        set.insert(Position::new(0, 0));
        set.insert(Position::new(8, 8));
        assert_eq!(set.len(), 2);
        assert!(set.contains(Position::new(0, 0)));
        assert!(!set.contains(Position::new(4, 4)));

        set.remove(Position::new(0, 0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_house_tables() {
        for i in 0..9 {
            assert_eq!(PositionSet::ROW_POSITIONS[i].len(), 9);
            assert_eq!(PositionSet::COLUMN_POSITIONS[i].len(), 9);
            assert_eq!(PositionSet::BOX_POSITIONS[i].len(), 9);
        }
        assert!(PositionSet::ROW_POSITIONS[3].contains(Position::new(7, 3)));
        assert!(PositionSet::COLUMN_POSITIONS[3].contains(Position::new(3, 7)));
        assert!(PositionSet::BOX_POSITIONS[8].contains(Position::new(8, 8)));
    }

    #[test]
    fn test_peers_table() {
        for index in 0..81 {
            let pos = Position::from_index(index);
            let peers = PositionSet::PEERS[index as usize];
            assert_eq!(peers.len(), 20);
            assert!(!peers.contains(pos));
        }
    }

    #[test]
    fn test_iteration_is_row_major() {
        let set = PositionSet::from_iter([
            Position::new(5, 2),
            Position::new(0, 0),
            Position::new(2, 1),
        ]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            vec![Position::new(0, 0), Position::new(2, 1), Position::new(5, 2)]
        );
    }

    #[test]
    fn test_house_mask_projection() {
        let set = PositionSet::from_iter([Position::new(1, 4), Position::new(7, 4)]);
        let mask = set.house_mask(House::Row { y: 4 });
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(1));
        assert!(mask.contains(7));
    }

    #[test]
    fn test_full_complement() {
        assert_eq!(PositionSet::FULL.len(), 81);
        assert_eq!(!PositionSet::FULL, PositionSet::EMPTY);
        assert_eq!((!PositionSet::EMPTY).len(), 81);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(
            PositionSet::from_elem(Position::new(3, 3)).as_single(),
            Some(Position::new(3, 3))
        );
        assert_eq!(PositionSet::ROW_POSITIONS[0].as_single(), None);
    }
}
