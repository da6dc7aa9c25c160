//! Stopping conditions evaluated on freshly produced interiors.

use turf_core::CellState;
use turf_grid::Snapshot;

/// A predicate over the just-produced interior that ends the run early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopCondition {
    /// Stop once no `Empty` interior cell remains: the ground is fully
    /// claimed and only the two species are left contesting it.
    NoEmptyCells,
}

impl StopCondition {
    /// Whether the condition holds for `snapshot`.
    pub fn is_met(&self, snapshot: &Snapshot) -> bool {
        match self {
            Self::NoEmptyCells => snapshot.count(CellState::Empty) == 0,
        }
    }
}
