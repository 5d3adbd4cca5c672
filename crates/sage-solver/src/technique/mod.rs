//! Human-style solving techniques.
//!
//! Each technique implements the [`Technique`] trait: it scans a
//! [`HintGrid`] snapshot and reports every deduction it can justify as a
//! [`Hint`]. Detectors never mutate the grid.

use std::fmt::Debug;

use sage_core::DigitGrid;

pub use self::{
    claiming::Claiming, hidden_single::HiddenSingle, hidden_subset::HiddenSubset,
    naked_single::NakedSingle, naked_subset::NakedSubset, pointing::Pointing,
    swordfish::Swordfish, x_wing::XWing, xy_wing::XyWing,
};
use crate::{Hint, HintGrid};

mod claiming;
mod hidden_single;
mod hidden_subset;
mod naked_single;
mod naked_subset;
mod pointing;
mod swordfish;
mod x_wing;
mod xy_wing;

/// A trait representing a human-style solving technique.
///
/// Detectors are pure: they read a [`HintGrid`] and return the hints they
/// find, ordered by their own scan order.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Scans the grid and returns every hint the technique justifies.
    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns all available techniques, ordered from easiest to hardest.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedSubset::new()),
        Box::new(HiddenSubset::new()),
        Box::new(Pointing::new()),
        Box::new(Claiming::new()),
        Box::new(XWing::new()),
        Box::new(Swordfish::new()),
        Box::new(XyWing::new()),
    ]
}

/// Returns the hints for a board, preferring singles.
///
/// If any naked or hidden single exists, only singles are returned; the
/// remaining detectors are not consulted. Otherwise the harder techniques
/// run in catalog order and their hints are concatenated. An empty result
/// means no catalogued technique applies.
#[must_use]
pub fn all_hints(board: &DigitGrid) -> Vec<Hint> {
    let grid = HintGrid::from_grid(board);

    let mut singles = NakedSingle::new().find_hints(&grid);
    singles.extend(HiddenSingle::new().find_hints(&grid));
    if !singles.is_empty() {
        return singles;
    }

    let mut hints = Vec::new();
    for technique in all_techniques().iter().skip(2) {
        hints.extend(technique.find_hints(&grid));
    }
    hints
}

/// Returns the easiest available deduction for a detection snapshot.
///
/// Techniques are consulted in catalog order and the first hint found
/// wins. `None` means no catalogued technique applies to the snapshot.
#[must_use]
pub fn first_hint(grid: &HintGrid) -> Option<Hint> {
    all_techniques()
        .iter()
        .find_map(|technique| technique.find_hints(grid).into_iter().next())
}

/// Returns every hint of every technique, with no short-circuiting.
///
/// This is the flat survey of a position; the interactive path is
/// [`all_hints`].
#[must_use]
pub fn exhaustive_hints(board: &DigitGrid) -> Vec<Hint> {
    let grid = HintGrid::from_grid(board);
    let mut hints = Vec::new();
    for technique in all_techniques() {
        hints.extend(technique.find_hints(&grid));
    }
    hints
}
