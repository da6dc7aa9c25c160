//! Interior-only grid snapshots.

use turf_core::CellState;

/// An owned, border-free copy of a grid's interior at one generation.
///
/// Snapshots are what trajectories are made of: each is an independent
/// `rows x cols` copy, so mutating the grid after taking one never
/// retroactively changes recorded history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    rows: u32,
    cols: u32,
    cells: Vec<CellState>,
}

impl Snapshot {
    /// Assemble a snapshot from row-major interior cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != rows * cols`. Snapshots are only built
    /// by [`Grid::snapshot_interior`](crate::Grid::snapshot_interior) and
    /// the replay decoder, both of which size the vector exactly.
    pub fn new(rows: u32, cols: u32, cells: Vec<CellState>) -> Self {
        assert_eq!(
            cells.len(),
            (rows as usize) * (cols as usize),
            "snapshot cell count must match dimensions"
        );
        Self { rows, cols, cells }
    }

    /// Snapshot height (interior rows).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Snapshot width (interior columns).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Row-major cell data.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Read the cell at 0-based `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: u32, col: u32) -> Option<CellState> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[(row as usize) * (self.cols as usize) + col as usize])
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.cols as usize)
    }

    /// Count the cells holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> Snapshot {
        Snapshot::new(
            2,
            3,
            vec![
                CellState::Empty,
                CellState::A,
                CellState::B,
                CellState::B,
                CellState::A,
                CellState::Empty,
            ],
        )
    }

    #[test]
    fn get_is_row_major() {
        let s = snap();
        assert_eq!(s.get(0, 1), Some(CellState::A));
        assert_eq!(s.get(1, 0), Some(CellState::B));
        assert_eq!(s.get(2, 0), None);
        assert_eq!(s.get(0, 3), None);
    }

    #[test]
    fn iter_rows_chunks_by_width() {
        let s = snap();
        let rows: Vec<_> = s.iter_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1][1], CellState::A);
    }

    #[test]
    fn count_per_state() {
        let s = snap();
        assert_eq!(s.count(CellState::Empty), 2);
        assert_eq!(s.count(CellState::A), 2);
        assert_eq!(s.count(CellState::B), 2);
    }

    #[test]
    #[should_panic(expected = "snapshot cell count")]
    fn mismatched_dimensions_panic() {
        let _ = Snapshot::new(2, 2, vec![CellState::Empty; 3]);
    }
}
