//! Grid storage and neighbourhood sampling for the Turf automaton.
//!
//! The [`Grid`] owns a `(H+2) x (W+2)` cell buffer whose outer ring is a
//! fixed border: it exists so edge cells have a full complement of
//! neighbours to read, and it is never written after construction. The
//! sampler in [`neighbourhood`] reads the 4-connected (von Neumann) or
//! 8-connected (Moore) surround of an interior cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
pub mod neighbourhood;
mod snapshot;

pub use error::GridError;
pub use grid::Grid;
pub use neighbourhood::{neighbour_counts, neighbour_states, NeighbourhoodKind};
pub use snapshot::Snapshot;
