//! Backtracking search over raw bitmasks.
//!
//! This module is deliberately independent of
//! [`CandidateGrid`](sage_core::CandidateGrid): the search keeps one `u16`
//! mask per row, column, and box and recomputes cell candidates from those,
//! which is considerably faster than maintaining per-digit bitboards across
//! undo. Unsolvable and malformed boards are ordinary outcomes here, not
//! errors.

use sage_core::{Digit, DigitGrid, Position};

const ALL_DIGITS: u16 = 0x1FF;

/// Search state: placed digits plus per-house occupancy masks.
#[derive(Debug, Clone, Copy)]
struct Board {
    /// 0 for empty, 1-9 for placed digits.
    cells: [u8; 81],
    rows: [u16; 9],
    cols: [u16; 9],
    boxes: [u16; 9],
}

impl Board {
    fn new() -> Self {
        Self {
            cells: [0; 81],
            rows: [0; 9],
            cols: [0; 9],
            boxes: [0; 9],
        }
    }

    /// Builds the search state, or `None` if the givens already clash.
    fn from_grid(grid: &DigitGrid) -> Option<Self> {
        let mut board = Self::new();
        for pos in Position::all() {
            if let Some(digit) = grid.get(pos) {
                let bit = 1 << (digit.value() - 1);
                if board.candidates(pos) & bit == 0 {
                    return None;
                }
                board.put(pos, bit);
            }
        }
        Some(board)
    }

    fn candidates(&self, pos: Position) -> u16 {
        !(self.rows[usize::from(pos.y())]
            | self.cols[usize::from(pos.x())]
            | self.boxes[usize::from(pos.box_index())])
            & ALL_DIGITS
    }

    fn put(&mut self, pos: Position, bit: u16) {
        #[expect(clippy::cast_possible_truncation)]
        let value = bit.trailing_zeros() as u8 + 1;
        self.cells[usize::from(pos.index())] = value;
        self.rows[usize::from(pos.y())] |= bit;
        self.cols[usize::from(pos.x())] |= bit;
        self.boxes[usize::from(pos.box_index())] |= bit;
    }

    fn to_grid(self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::all() {
            let value = self.cells[usize::from(pos.index())];
            if value != 0 {
                grid.set(pos, Digit::from_value(value));
            }
        }
        grid
    }

    /// Fills cells with a single legal digit until none remain.
    ///
    /// Returns `false` on a contradiction (some empty cell has no legal
    /// digit).
    fn propagate_singles(&mut self) -> bool {
        loop {
            let mut changed = false;
            for pos in Position::all() {
                if self.cells[usize::from(pos.index())] != 0 {
                    continue;
                }
                let candidates = self.candidates(pos);
                match candidates.count_ones() {
                    0 => return false,
                    1 => {
                        self.put(pos, candidates);
                        changed = true;
                    }
                    _ => {}
                }
            }
            if !changed {
                return true;
            }
        }
    }

    /// Returns the empty cell with the fewest candidates, row-major
    /// first-encountered on ties, or `None` when the board is full.
    fn most_constrained_cell(&self) -> Option<(Position, u16)> {
        let mut best: Option<(Position, u16, u32)> = None;
        for pos in Position::all() {
            if self.cells[usize::from(pos.index())] != 0 {
                continue;
            }
            let candidates = self.candidates(pos);
            let count = candidates.count_ones();
            if best.is_none_or(|(_, _, best_count)| count < best_count) {
                best = Some((pos, candidates, count));
                if count <= 1 {
                    break;
                }
            }
        }
        best.map(|(pos, candidates, _)| (pos, candidates))
    }
}

/// Counts completions up to `limit`, recording the first in `first`.
fn search(mut board: Board, limit: u32, first: &mut Option<Board>) -> u32 {
    if !board.propagate_singles() {
        return 0;
    }
    let Some((pos, candidates)) = board.most_constrained_cell() else {
        if first.is_none() {
            *first = Some(board);
        }
        return 1;
    };

    let mut found = 0;
    let mut remaining = candidates;
    while remaining != 0 {
        let bit = remaining & remaining.wrapping_neg();
        remaining &= remaining - 1;

        let mut child = board;
        child.put(pos, bit);
        found += search(child, limit - found, first);
        if found >= limit {
            break;
        }
    }
    found
}

/// Returns the first solution of a board, or `None` if it has none.
///
/// Boards with clashing givens also return `None`.
#[must_use]
pub fn solve(grid: &DigitGrid) -> Option<DigitGrid> {
    let board = Board::from_grid(grid)?;
    let mut first = None;
    search(board, 1, &mut first);
    first.map(Board::to_grid)
}

/// Returns `true` if the board has exactly one completion.
///
/// The search stops as soon as a second solution is found.
#[must_use]
pub fn has_unique_solution(grid: &DigitGrid) -> bool {
    let Some(board) = Board::from_grid(grid) else {
        return false;
    };
    let mut first = None;
    search(board, 2, &mut first) == 1
}
