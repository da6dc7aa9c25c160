//! Neighbourhood kinds and the neighbour sampler.
//!
//! Sampling is a pure function of the grid it is handed. During an
//! evolution sweep the driver always passes the *previous* generation's
//! buffer, never the one being written, so every cell of a generation
//! updates as if simultaneously (synchronous update semantics).

use crate::error::GridError;
use crate::grid::Grid;
use smallvec::SmallVec;
use turf_core::{CellState, NeighbourCounts};

/// Which cells count as neighbours.
///
/// A closed enum rather than a string key: there is no "unsupported
/// neighbourhood" failure mode, and every dispatch site is checked for
/// exhaustiveness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighbourhoodKind {
    /// The 4 orthogonally adjacent cells (N, S, E, W).
    VonNeumann,
    /// All 8 surrounding cells (the 3x3 block minus the center).
    Moore,
}

impl NeighbourhoodKind {
    /// Number of cells examined per sample.
    pub const fn size(self) -> usize {
        match self {
            Self::VonNeumann => 4,
            Self::Moore => 8,
        }
    }

    /// `(dr, dc)` offsets of the neighbourhood, center excluded.
    pub const fn offsets(self) -> &'static [(i32, i32)] {
        const VON_NEUMANN: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const MOORE: [(i32, i32); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        match self {
            Self::VonNeumann => &VON_NEUMANN,
            Self::Moore => &MOORE,
        }
    }
}

/// Collect the states of the cells surrounding `(row, col)`.
///
/// Reads exactly [`kind.size()`](NeighbourhoodKind::size) cells. For
/// interior coordinates every read lands inside the bordered allocation;
/// an out-of-bounds read means the caller handed a non-interior coordinate
/// and surfaces as `Err(GridError::OutOfBounds)`.
pub fn neighbour_states(
    grid: &Grid,
    row: i32,
    col: i32,
    kind: NeighbourhoodKind,
) -> Result<SmallVec<[CellState; 8]>, GridError> {
    let mut states = SmallVec::new();
    for &(dr, dc) in kind.offsets() {
        states.push(grid.get(row + dr, col + dc)?);
    }
    Ok(states)
}

/// Count the `A` and `B` cells surrounding `(row, col)`.
pub fn neighbour_counts(
    grid: &Grid,
    row: i32,
    col: i32,
    kind: NeighbourhoodKind,
) -> Result<NeighbourCounts, GridError> {
    let mut counts = NeighbourCounts::default();
    for state in neighbour_states(grid, row, col, kind)? {
        match state {
            CellState::A => counts.a += 1,
            CellState::B => counts.b += 1,
            CellState::Empty => {}
        }
    }
    Ok(counts)
}
