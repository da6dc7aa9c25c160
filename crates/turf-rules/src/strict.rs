//! Strict deterministic majority.

use turf_core::{CellState, NeighbourCounts};

/// `a > b` hands the cell to `A`, `a < b` to `B`, a tie keeps the current
/// state. The comparison ignores what the cell currently holds; the
/// current state only matters when the counts are equal (which includes
/// the all-zero case).
pub(crate) fn next_state(current: CellState, counts: NeighbourCounts) -> CellState {
    if counts.a > counts.b {
        CellState::A
    } else if counts.a < counts.b {
        CellState::B
    } else {
        current
    }
}
