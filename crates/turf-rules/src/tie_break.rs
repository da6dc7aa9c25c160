//! Majority table with randomized tie-breaks.

use rand::Rng;
use turf_core::{CellState, NeighbourCounts};

/// A contested tie (`a == b`, both nonzero) resolves by coin flip: an
/// `Empty` cell is claimed by `A` or `B` with equal probability; an
/// occupied cell either reverts to `Empty` or keeps its state. All-zero
/// counts are *not* a tie; they fall through to the table, where neither
/// `>` nor `<` holds, and the cell is unchanged.
///
/// Non-tie table:
///
/// | current | condition | next  |
/// |---------|-----------|-------|
/// | `B`     | `a > b`   | Empty |
/// | `Empty` | `a > b`   | `A`   |
/// | `A`     | `a < b`   | Empty |
/// | `Empty` | `a < b`   | `B`   |
/// | any     | otherwise | unchanged |
pub(crate) fn next_state<R: Rng>(
    current: CellState,
    counts: NeighbourCounts,
    rng: &mut R,
) -> CellState {
    if counts.is_contested_tie() {
        return match current {
            CellState::Empty => {
                if rng.random::<bool>() {
                    CellState::A
                } else {
                    CellState::B
                }
            }
            occupied => {
                if rng.random::<bool>() {
                    CellState::Empty
                } else {
                    occupied
                }
            }
        };
    }
    match current {
        CellState::B if counts.a > counts.b => CellState::Empty,
        CellState::Empty if counts.a > counts.b => CellState::A,
        CellState::A if counts.a < counts.b => CellState::Empty,
        CellState::Empty if counts.a < counts.b => CellState::B,
        unchanged => unchanged,
    }
}
