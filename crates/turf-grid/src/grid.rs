//! The bordered cell buffer.

use crate::error::GridError;
use crate::snapshot::Snapshot;
use turf_core::CellState;

/// A 2D cell buffer with a fixed one-cell border ring.
///
/// An `H x W` grid allocates `(H+2) x (W+2)` cells row-major. Interior
/// cells live at `[1, H] x [1, W]`; the outer ring is the border. The
/// border exists purely so neighbour lookups at the interior edge never
/// need special-casing, and it is never mutated after construction:
/// [`set_interior`](Grid::set_interior) rejects border coordinates.
///
/// # Examples
///
/// ```
/// use turf_core::CellState;
/// use turf_grid::Grid;
///
/// let grid = Grid::from_fn(4, 4, |_, _| CellState::Empty).unwrap();
/// assert_eq!(grid.rows(), 4);
/// assert_eq!(grid.total_rows(), 6);
/// assert_eq!(grid.get(0, 0).unwrap(), CellState::Empty);
/// assert!(grid.get(6, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Maximum interior dimension: coordinates use `i32`, so each axis
    /// (border included) must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32 - 2;

    /// Build a grid by calling `fill` for every cell, border included.
    ///
    /// `fill` receives coordinates over the full allocation,
    /// `[0, H+1] x [0, W+1]`, in row-major order; a seeded generator
    /// therefore produces the same grid for the same seed.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either interior dimension is
    /// 0, or `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Grid::MAX_DIM).
    pub fn from_fn(
        rows: u32,
        cols: u32,
        mut fill: impl FnMut(i32, i32) -> CellState,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
            });
        }
        let total = (rows as usize + 2) * (cols as usize + 2);
        let mut cells = Vec::with_capacity(total);
        for r in 0..rows as i32 + 2 {
            for c in 0..cols as i32 + 2 {
                cells.push(fill(r, c));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Interior height `H`.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Interior width `W`.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Allocated height including the border ring, `H + 2`.
    pub fn total_rows(&self) -> u32 {
        self.rows + 2
    }

    /// Allocated width including the border ring, `W + 2`.
    pub fn total_cols(&self) -> u32 {
        self.cols + 2
    }

    /// Whether `(row, col)` is an interior cell.
    pub fn is_interior(&self, row: i32, col: i32) -> bool {
        row >= 1 && row <= self.rows as i32 && col >= 1 && col <= self.cols as i32
    }

    /// Read the cell at `(row, col)`, border included.
    ///
    /// Valid coordinates are `[0, H+1] x [0, W+1]`; anything else is
    /// `Err(GridError::OutOfBounds)`.
    pub fn get(&self, row: i32, col: i32) -> Result<CellState, GridError> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Write an interior cell.
    ///
    /// Border coordinates are rejected with `Err(GridError::OutOfBounds)`:
    /// the border is fixed for the lifetime of the grid, and this is the
    /// only mutation path, so border invariance holds by construction.
    pub fn set_interior(
        &mut self,
        row: i32,
        col: i32,
        value: CellState,
    ) -> Result<(), GridError> {
        if !self.is_interior(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                bounds: format!("interior [1, {}] x [1, {}]", self.rows, self.cols),
            });
        }
        let i = (row as usize) * (self.cols as usize + 2) + col as usize;
        self.cells[i] = value;
        Ok(())
    }

    /// Copy the interior into an independent [`Snapshot`].
    ///
    /// The returned snapshot is `H x W` with no border rows or columns,
    /// and shares no storage with the grid, so trajectories built from it
    /// survive subsequent evolution.
    pub fn snapshot_interior(&self) -> Snapshot {
        let mut cells = Vec::with_capacity((self.rows as usize) * (self.cols as usize));
        let stride = self.cols as usize + 2;
        for r in 1..=self.rows as usize {
            let start = r * stride + 1;
            cells.extend_from_slice(&self.cells[start..start + self.cols as usize]);
        }
        Snapshot::new(self.rows, self.cols, cells)
    }

    fn index_of(&self, row: i32, col: i32) -> Result<usize, GridError> {
        let max_r = self.rows as i32 + 1;
        let max_c = self.cols as i32 + 1;
        if row < 0 || row > max_r || col < 0 || col > max_c {
            return Err(GridError::OutOfBounds {
                row,
                col,
                bounds: format!("[0, {max_r}] x [0, {max_c}]"),
            });
        }
        Ok((row as usize) * (self.cols as usize + 2) + col as usize)
    }
}
