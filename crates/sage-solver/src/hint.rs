//! Hints produced by technique detectors.
//!
//! A [`Hint`] records one concrete deduction: which technique fired, which
//! cells justify it, and what it allows the solver to do next. Hints are
//! plain values; applying one to a board is the caller's decision.

use std::fmt;

use sage_core::{Digit, DigitSet, House, Position, PositionSet};

const NAKED_SUBSET_NAMES: [&str; 7] = [
    "Naked Subset (2)",
    "Naked Subset (3)",
    "Naked Subset (4)",
    "Naked Subset (5)",
    "Naked Subset (6)",
    "Naked Subset (7)",
    "Naked Subset (8)",
];

const HIDDEN_SUBSET_NAMES: [&str; 3] = [
    "Hidden Subset (2)",
    "Hidden Subset (3)",
    "Hidden Subset (4)",
];

/// The board mutation a hint justifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintAction {
    /// Place a digit in a cell.
    Assign {
        /// The cell to fill.
        pos: Position,
        /// The digit to place.
        digit: Digit,
    },
    /// Remove candidate digits from cells where they are present.
    Eliminate {
        /// The digits to remove.
        digits: DigitSet,
        /// The cells to remove them from.
        positions: PositionSet,
    },
}

/// A single deduction found by a technique detector.
///
/// Each variant carries exactly the evidence its technique produces. The
/// uniform accessors ([`technique_name`](Self::technique_name),
/// [`targets`](Self::targets), [`action`](Self::action),
/// [`weight`](Self::weight)) let callers treat hints generically; the
/// [`Display`](fmt::Display) impl renders a human-readable justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// A cell whose candidate set has exactly one digit.
    NakedSingle {
        /// The cell.
        pos: Position,
        /// Its only candidate.
        digit: Digit,
    },
    /// A digit with exactly one possible cell within a house.
    HiddenSingle {
        /// The house forcing the placement.
        house: House,
        /// The only cell that can take the digit.
        pos: Position,
        /// The forced digit.
        digit: Digit,
    },
    /// N cells of a house that together hold only N candidate digits.
    NakedSubset {
        /// The house containing the subset.
        house: House,
        /// The subset size (2-8).
        size: u8,
        /// The cells forming the subset.
        cells: PositionSet,
        /// The digits locked into those cells.
        digits: DigitSet,
        /// The other cells of the house still holding one of the digits.
        eliminations: PositionSet,
    },
    /// N digits confined to exactly N cells of a house.
    HiddenSubset {
        /// The house containing the subset.
        house: House,
        /// The subset size (2-4).
        size: u8,
        /// The cells the digits are confined to.
        cells: PositionSet,
        /// The confined digits.
        digits: DigitSet,
        /// The extra candidates removable from those cells.
        trimmed: DigitSet,
    },
    /// A digit confined to one line within a box.
    Pointing {
        /// The box confining the digit.
        box_index: u8,
        /// The row or column the candidates point along.
        line: House,
        /// The confined digit.
        digit: Digit,
        /// The candidate cells inside the box.
        cells: PositionSet,
        /// The cells on the line outside the box losing the digit.
        eliminations: PositionSet,
    },
    /// A digit confined to one box within a line.
    Claiming {
        /// The row or column confining the digit.
        line: House,
        /// The box the candidates are claimed by.
        box_index: u8,
        /// The confined digit.
        digit: Digit,
        /// The candidate cells on the line.
        cells: PositionSet,
        /// The cells in the box off the line losing the digit.
        eliminations: PositionSet,
    },
    /// Two base lines whose candidates for a digit align on two cover lines.
    XWing {
        /// The digit forming the pattern.
        digit: Digit,
        /// `true` when the base lines are rows.
        base_rows: bool,
        /// The two base line indices.
        lines: (u8, u8),
        /// The two cover line indices.
        covers: (u8, u8),
        /// The four corner cells.
        corners: PositionSet,
        /// The cover-line cells outside the bases losing the digit.
        eliminations: PositionSet,
    },
    /// Three base lines whose candidates for a digit span three cover lines.
    Swordfish {
        /// The digit forming the pattern.
        digit: Digit,
        /// `true` when the base lines are rows.
        base_rows: bool,
        /// The three base line indices.
        lines: [u8; 3],
        /// The three cover line indices.
        covers: [u8; 3],
        /// The cover-line cells outside the bases losing the digit.
        eliminations: PositionSet,
    },
    /// A bivalue pivot with two bivalue wings forcing a digit out of their
    /// common peers.
    XyWing {
        /// The pivot cell, holding candidates {x, y}.
        pivot: Position,
        /// The wing cells, holding {x, z} and {y, z}.
        wings: (Position, Position),
        /// The pivot's two candidates.
        pivot_digits: DigitSet,
        /// The digit z shared by both wings.
        digit: Digit,
        /// The common peers of both wings losing z.
        eliminations: PositionSet,
    },
}

impl Hint {
    /// Returns the technique name, sized for subset hints.
    #[must_use]
    pub fn technique_name(&self) -> &'static str {
        match self {
            Hint::NakedSingle { .. } => "Naked Single",
            Hint::HiddenSingle { .. } => "Hidden Single",
            Hint::NakedSubset { size, .. } => NAKED_SUBSET_NAMES[usize::from(size - 2)],
            Hint::HiddenSubset { size, .. } => HIDDEN_SUBSET_NAMES[usize::from(size - 2)],
            Hint::Pointing { .. } => "Pointing",
            Hint::Claiming { .. } => "Claiming",
            Hint::XWing { .. } => "X-Wing",
            Hint::Swordfish { .. } => "Swordfish",
            Hint::XyWing { .. } => "XY-Wing",
        }
    }

    /// Returns the cells that justify the hint.
    #[must_use]
    pub fn targets(&self) -> PositionSet {
        match self {
            Hint::NakedSingle { pos, .. } | Hint::HiddenSingle { pos, .. } => {
                PositionSet::from_elem(*pos)
            }
            Hint::NakedSubset { cells, .. }
            | Hint::HiddenSubset { cells, .. }
            | Hint::Pointing { cells, .. }
            | Hint::Claiming { cells, .. } => *cells,
            Hint::XWing { corners, .. } => *corners,
            Hint::Swordfish {
                base_rows,
                lines,
                covers,
                ..
            } => {
                let mut targets = PositionSet::new();
                for &line in lines {
                    for &cover in covers {
                        let (x, y) = if *base_rows { (cover, line) } else { (line, cover) };
                        targets.insert(Position::new(x, y));
                    }
                }
                targets
            }
            Hint::XyWing { pivot, wings, .. } => {
                PositionSet::from_iter([*pivot, wings.0, wings.1])
            }
        }
    }

    /// Returns the board mutation the hint justifies.
    #[must_use]
    pub fn action(&self) -> HintAction {
        match self {
            Hint::NakedSingle { pos, digit } | Hint::HiddenSingle { pos, digit, .. } => {
                HintAction::Assign {
                    pos: *pos,
                    digit: *digit,
                }
            }
            Hint::NakedSubset {
                digits,
                eliminations,
                ..
            } => HintAction::Eliminate {
                digits: *digits,
                positions: *eliminations,
            },
            Hint::HiddenSubset { cells, trimmed, .. } => HintAction::Eliminate {
                digits: *trimmed,
                positions: *cells,
            },
            Hint::Pointing {
                digit,
                eliminations,
                ..
            }
            | Hint::Claiming {
                digit,
                eliminations,
                ..
            }
            | Hint::XWing {
                digit,
                eliminations,
                ..
            }
            | Hint::Swordfish {
                digit,
                eliminations,
                ..
            }
            | Hint::XyWing {
                digit,
                eliminations,
                ..
            } => HintAction::Eliminate {
                digits: DigitSet::from_elem(*digit),
                positions: *eliminations,
            },
        }
    }

    /// Returns the difficulty weight of the technique.
    ///
    /// Singles weigh 1; pointing, claiming, and size-2 subsets weigh 2;
    /// size-3 and size-4 subsets weigh 3; larger subsets and X-Wing weigh 4;
    /// Swordfish and XY-Wing weigh 5.
    #[must_use]
    pub fn weight(&self) -> u32 {
        match self {
            Hint::NakedSingle { .. } | Hint::HiddenSingle { .. } => 1,
            Hint::NakedSubset { size, .. } | Hint::HiddenSubset { size, .. } => match size {
                2 => 2,
                3 | 4 => 3,
                _ => 4,
            },
            Hint::Pointing { .. } | Hint::Claiming { .. } => 2,
            Hint::XWing { .. } => 4,
            Hint::Swordfish { .. } | Hint::XyWing { .. } => 5,
        }
    }

    /// Returns `true` if the hint is a naked or hidden single.
    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Hint::NakedSingle { .. } | Hint::HiddenSingle { .. })
    }

    /// Returns a human-readable justification for the hint.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

fn digit_list(digits: DigitSet) -> String {
    let mut out = String::new();
    for digit in digits {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push((b'0' + digit.value()) as char);
    }
    out
}

fn line_name(base_rows: bool) -> (&'static str, &'static str) {
    if base_rows {
        ("rows", "columns")
    } else {
        ("columns", "rows")
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::NakedSingle { pos, digit } => {
                write!(f, "cell {pos} has {digit} as its only candidate")
            }
            Hint::HiddenSingle { house, pos, digit } => {
                write!(f, "{digit} fits only at {pos} within {house}")
            }
            Hint::NakedSubset {
                house,
                size,
                digits,
                ..
            } => {
                write!(
                    f,
                    "{size} cells of {house} hold only the digits {}, removing them elsewhere in the house",
                    digit_list(*digits)
                )
            }
            Hint::HiddenSubset {
                house,
                size,
                digits,
                ..
            } => {
                write!(
                    f,
                    "the digits {} fit only in {size} cells of {house}, removing their other candidates",
                    digit_list(*digits)
                )
            }
            Hint::Pointing {
                box_index,
                line,
                digit,
                ..
            } => {
                write!(
                    f,
                    "in box {box_index}, {digit} is confined to {line}, removing it from the rest of the line"
                )
            }
            Hint::Claiming {
                line,
                box_index,
                digit,
                ..
            } => {
                write!(
                    f,
                    "on {line}, {digit} is confined to box {box_index}, removing it from the rest of the box"
                )
            }
            Hint::XWing {
                digit,
                base_rows,
                lines,
                covers,
                ..
            } => {
                let (base, cover) = line_name(*base_rows);
                write!(
                    f,
                    "{digit} forms an X-Wing on {base} {} and {} over {cover} {} and {}",
                    lines.0, lines.1, covers.0, covers.1
                )
            }
            Hint::Swordfish {
                digit,
                base_rows,
                lines,
                covers,
                ..
            } => {
                let (base, cover) = line_name(*base_rows);
                write!(
                    f,
                    "{digit} forms a Swordfish on {base} {}, {}, {} over {cover} {}, {}, {}",
                    lines[0], lines[1], lines[2], covers[0], covers[1], covers[2]
                )
            }
            Hint::XyWing {
                pivot,
                wings,
                digit,
                ..
            } => {
                write!(
                    f,
                    "XY-Wing pivoted at {pivot} with wings {} and {} removes {digit} from their common peers",
                    wings.0, wings.1
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technique_names_are_sized() {
        let hint = Hint::NakedSubset {
            house: House::Row { y: 0 },
            size: 3,
            cells: PositionSet::new(),
            digits: DigitSet::new(),
            eliminations: PositionSet::new(),
        };
        assert_eq!(hint.technique_name(), "Naked Subset (3)");

        let hint = Hint::HiddenSubset {
            house: House::Box { index: 0 },
            size: 2,
            cells: PositionSet::new(),
            digits: DigitSet::new(),
            trimmed: DigitSet::new(),
        };
        assert_eq!(hint.technique_name(), "Hidden Subset (2)");
    }

    #[test]
    fn test_weights() {
        let single = Hint::NakedSingle {
            pos: Position::new(0, 0),
            digit: Digit::D1,
        };
        assert_eq!(single.weight(), 1);
        assert!(single.is_single());

        let pair = Hint::NakedSubset {
            house: House::Row { y: 0 },
            size: 2,
            cells: PositionSet::new(),
            digits: DigitSet::new(),
            eliminations: PositionSet::new(),
        };
        assert_eq!(pair.weight(), 2);

        let quad = Hint::HiddenSubset {
            house: House::Row { y: 0 },
            size: 4,
            cells: PositionSet::new(),
            digits: DigitSet::new(),
            trimmed: DigitSet::new(),
        };
        assert_eq!(quad.weight(), 3);

        let quint = Hint::NakedSubset {
            house: House::Row { y: 0 },
            size: 5,
            cells: PositionSet::new(),
            digits: DigitSet::new(),
            eliminations: PositionSet::new(),
        };
        assert_eq!(quint.weight(), 4);

        let fish = Hint::Swordfish {
            digit: Digit::D1,
            base_rows: true,
            lines: [0, 1, 2],
            covers: [3, 4, 5],
            eliminations: PositionSet::new(),
        };
        assert_eq!(fish.weight(), 5);
        assert!(!fish.is_single());
    }

    #[test]
    fn test_reason_text() {
        let hint = Hint::NakedSubset {
            house: House::Row { y: 0 },
            size: 2,
            cells: PositionSet::new(),
            digits: DigitSet::from_iter([Digit::D1, Digit::D4]),
            eliminations: PositionSet::new(),
        };
        assert_eq!(
            hint.reason(),
            "2 cells of row 0 hold only the digits 1, 4, removing them elsewhere in the house"
        );
    }

    #[test]
    fn test_assign_action() {
        let hint = Hint::HiddenSingle {
            house: House::Column { x: 2 },
            pos: Position::new(2, 5),
            digit: Digit::D7,
        };
        assert_eq!(
            hint.action(),
            HintAction::Assign {
                pos: Position::new(2, 5),
                digit: Digit::D7,
            }
        );
        assert_eq!(hint.targets().len(), 1);
    }

    #[test]
    fn test_swordfish_targets_cover_pattern_cells() {
        let hint = Hint::Swordfish {
            digit: Digit::D2,
            base_rows: true,
            lines: [0, 4, 8],
            covers: [1, 5, 7],
            eliminations: PositionSet::new(),
        };
        let targets = hint.targets();
        assert_eq!(targets.len(), 9);
        assert!(targets.contains(Position::new(1, 0)));
        assert!(targets.contains(Position::new(7, 8)));
    }
}
