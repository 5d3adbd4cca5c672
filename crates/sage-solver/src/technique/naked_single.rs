use crate::{BoxedTechnique, Hint, HintGrid, Technique};

const NAME: &str = "Naked Single";

/// A technique that fills a cell whose candidate set has exactly one digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle {}

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_hints(&self, grid: &HintGrid) -> Vec<Hint> {
        let mut hints = Vec::new();
        for pos in grid.open() {
            if let Some(digit) = grid.candidates_at(pos).as_single() {
                hints.push(Hint::NakedSingle { pos, digit });
            }
        }
        hints
    }
}
