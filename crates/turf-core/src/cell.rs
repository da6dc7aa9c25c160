//! The tri-state cell value domain.

use std::fmt;

/// The state of a single grid cell.
///
/// The automaton is a closed three-way domain: a cell is unoccupied, or
/// held by one of the two competing species. The discriminants match the
/// on-disk byte encoding (`1`, `2`, `3`); no other value is ever valid.
///
/// # Examples
///
/// ```
/// use turf_core::CellState;
///
/// assert_eq!(CellState::A.as_u8(), 2);
/// assert_eq!(CellState::try_from(3u8), Ok(CellState::B));
/// assert!(CellState::try_from(0u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Unoccupied cell.
    Empty = 1,
    /// Held by species A.
    A = 2,
    /// Held by species B.
    B = 3,
}

impl CellState {
    /// The wire/storage byte for this state.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether the cell is unoccupied.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl TryFrom<u8> for CellState {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Empty),
            2 => Ok(Self::A),
            3 => Ok(Self::B),
            other => Err(InvalidCellValue { value: other }),
        }
    }
}

/// A byte outside the closed cell domain `{1, 2, 3}`.
///
/// Only reachable on the persistence decode path; in-memory state is typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCellValue {
    /// The offending byte.
    pub value: u8,
}

impl fmt::Display for InvalidCellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell value {} (expected 1, 2, or 3)", self.value)
    }
}

impl std::error::Error for InvalidCellValue {}
