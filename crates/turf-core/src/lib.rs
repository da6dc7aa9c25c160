//! Core types for the Turf contest automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cell-state domain and the neighbour-count value type shared by the grid,
//! rule, and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod counts;

pub use cell::{CellState, InvalidCellValue};
pub use counts::NeighbourCounts;
