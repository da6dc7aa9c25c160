//! Initial-state generators.

use rand::Rng;
use turf_core::CellState;
use turf_grid::{Grid, GridError};

/// How the initial grid is populated.
///
/// Both strategies satisfy the border invariant, each in its own way:
/// `UniformRandom` pins the border to `Empty` at construction, while
/// `ClearedCenter` leaves the border randomized; the evolution sweep
/// never touches it, so it stays fixed either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStrategy {
    /// Every interior cell uniform over `{Empty, A, B}`; border pinned
    /// to `Empty`.
    UniformRandom,
    /// Every cell (border included) uniform over `{Empty, A, B}`, then a
    /// central square spanning the middle half of each axis cleared to
    /// `Empty`. The two species grow back into the vacated ground.
    ClearedCenter,
}

/// Build an initial grid for the given strategy.
///
/// Cells are drawn in row-major order from `rng`, so a fixed seed always
/// produces the same grid.
pub(crate) fn build_grid<R: Rng>(
    rows: u32,
    cols: u32,
    strategy: InitStrategy,
    rng: &mut R,
) -> Result<Grid, GridError> {
    match strategy {
        InitStrategy::UniformRandom => Grid::from_fn(rows, cols, |r, c| {
            if r == 0 || c == 0 || r == rows as i32 + 1 || c == cols as i32 + 1 {
                CellState::Empty
            } else {
                uniform_state(rng)
            }
        }),
        InitStrategy::ClearedCenter => {
            let (r_lo, r_hi) = center_band(rows + 2);
            let (c_lo, c_hi) = center_band(cols + 2);
            Grid::from_fn(rows, cols, |r, c| {
                let state = uniform_state(rng);
                if (r_lo..=r_hi).contains(&r) && (c_lo..=c_hi).contains(&c) {
                    CellState::Empty
                } else {
                    state
                }
            })
        }
    }
}

/// Inclusive bounds of the cleared central band on an axis of total
/// length `n` (border included): `[n/2 - n/4, n/2 + n/4]`.
fn center_band(n: u32) -> (i32, i32) {
    let mid = (n / 2) as i32;
    let quarter = (n / 4) as i32;
    (mid - quarter, mid + quarter)
}

fn uniform_state<R: Rng>(rng: &mut R) -> CellState {
    match rng.random_range(1u8..=3) {
        1 => CellState::Empty,
        2 => CellState::A,
        _ => CellState::B,
    }
}
