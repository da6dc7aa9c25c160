//! Trajectory persistence and playback.
//!
//! A finished run hands its trajectory (an ordered, finite sequence of
//! interior snapshots) to this crate whole; there is no streaming
//! persistence, the engine materializes everything first. The binary
//! format is little-endian and deliberately simple: magic, version, a
//! [`RunDescriptor`], then one cell byte per cell per frame.
//!
//! [`TrajectoryWriter`] and [`TrajectoryReader`] are generic over
//! `Write`/`Read` so tests use `Vec<u8>` and production code uses buffered
//! files. [`Playback`] iterates a decoded trajectory up to its declared
//! length and renders frames as ASCII.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod codec;
mod error;
mod playback;
mod reader;
mod writer;

pub use error::ReplayError;
pub use playback::{ascii_frame, Playback};
pub use reader::TrajectoryReader;
pub use writer::{write_trajectory, TrajectoryWriter};

/// File magic: the first four bytes of every trajectory file.
pub const MAGIC: [u8; 4] = *b"TURF";

/// Format version written and accepted by this build.
pub const FORMAT_VERSION: u16 = 1;

/// Run parameters stored in the trajectory header.
///
/// Everything a reader needs to size and replay the frames: the RNG seed
/// the run used, the interior dimensions, and the declared frame count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunDescriptor {
    /// Seed of the recorded run.
    pub seed: u64,
    /// Interior rows per frame.
    pub rows: u32,
    /// Interior columns per frame.
    pub cols: u32,
    /// Number of frames that follow the header.
    pub frame_count: u32,
}

impl RunDescriptor {
    /// Cells per frame.
    pub fn cells_per_frame(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}
