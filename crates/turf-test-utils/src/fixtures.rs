//! Handcrafted grid builders.

use turf_core::CellState;
use turf_grid::Grid;

/// Build a grid from row-major interior cells, with an `Empty` border.
///
/// # Panics
///
/// Panics if `interior.len() != rows * cols` or the dimensions are
/// rejected by [`Grid::from_fn`].
pub fn grid_from_interior(rows: u32, cols: u32, interior: &[CellState]) -> Grid {
    assert_eq!(
        interior.len(),
        (rows as usize) * (cols as usize),
        "interior cell count must match dimensions"
    );
    Grid::from_fn(rows, cols, |r, c| {
        if r >= 1 && r <= rows as i32 && c >= 1 && c <= cols as i32 {
            interior[((r - 1) as usize) * (cols as usize) + (c - 1) as usize]
        } else {
            CellState::Empty
        }
    })
    .expect("fixture dimensions are valid")
}

/// Build a grid whose interior is uniformly `state`, with an `Empty` border.
pub fn uniform_grid(rows: u32, cols: u32, state: CellState) -> Grid {
    grid_from_interior(rows, cols, &vec![state; (rows as usize) * (cols as usize)])
}
