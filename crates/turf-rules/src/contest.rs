//! Win-weighted probabilistic contest.

use rand::Rng;
use turf_core::{CellState, NeighbourCounts};

/// Each side's win probability is its share of the occupied neighbours:
/// `a / (a + b)` for `A`, `b / (a + b)` for `B`. Two independent uniform
/// draws decide the winners; a cell only flips when the side named by the
/// matching table row actually won its draw.
///
/// The rows form a first-match-wins chain, not independent rules:
///
/// | current | condition | next (if that side won)  |
/// |---------|-----------|--------------------------|
/// | `B`     | `a >= b`  | Empty                    |
/// | `A`     | `a > b`   | `A` (no-op guard)        |
/// | `Empty` | `a > b`   | `A`                      |
/// | `A`     | `a <= b`  | Empty                    |
/// | `Empty` | `a < b`   | `B`                      |
/// | any     | otherwise | unchanged                |
///
/// With no occupied neighbours there is no contest and the cell is
/// unchanged (and nothing is drawn).
pub(crate) fn next_state<R: Rng>(
    current: CellState,
    counts: NeighbourCounts,
    rng: &mut R,
) -> CellState {
    let total = counts.total();
    if total == 0 {
        return current;
    }
    // Both draws happen unconditionally, in a fixed order, before any
    // branching: a seeded replay must consume the stream identically
    // whichever row ends up matching.
    let a_wins = rng.random::<f64>() <= f64::from(counts.a) / f64::from(total);
    let b_wins = rng.random::<f64>() <= f64::from(counts.b) / f64::from(total);

    match current {
        CellState::B if counts.a >= counts.b && a_wins => CellState::Empty,
        CellState::A if counts.a > counts.b && a_wins => CellState::A,
        CellState::Empty if counts.a > counts.b && a_wins => CellState::A,
        CellState::A if counts.a <= counts.b && b_wins => CellState::Empty,
        CellState::Empty if counts.a < counts.b && b_wins => CellState::B,
        unchanged => unchanged,
    }
}
