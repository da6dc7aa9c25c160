//! Error types for grid construction and access.

use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell access fell outside the allocated `(H+2) x (W+2)` buffer.
    ///
    /// The evolution sweep only touches coordinates derived from the
    /// grid's own dimensions, so hitting this in normal operation
    /// indicates a driver bug. It is propagated as fatal, never retried.
    OutOfBounds {
        /// The offending row.
        row: i32,
        /// The offending column.
        col: i32,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with a zero interior dimension.
    EmptyGrid,
    /// An interior dimension exceeds `i32::MAX` (coordinates are `i32`).
    DimensionTooLarge {
        /// Which axis overflowed.
        name: &'static str,
        /// The configured value.
        value: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col, bounds } => {
                write!(f, "cell ({row}, {col}) out of bounds: {bounds}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one interior cell"),
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} = {value} exceeds the maximum grid dimension")
            }
        }
    }
}

impl std::error::Error for GridError {}
