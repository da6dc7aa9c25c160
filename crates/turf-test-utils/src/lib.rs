//! Shared fixtures for Turf tests.
//!
//! - [`CountingRng`]: a deterministic random source that records how many
//!   words were drawn, for asserting which rule paths consult the RNG.
//! - Grid builders for handcrafted scenarios.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod fixtures;
mod rng;

pub use fixtures::{grid_from_interior, uniform_grid};
pub use rng::CountingRng;
