//! Trajectory recording.

use std::io::Write;

use crate::codec;
use crate::error::ReplayError;
use crate::RunDescriptor;
use turf_grid::Snapshot;

/// Streams a fixed number of frames to a `Write` sink.
///
/// The header (including the declared frame count) goes out at
/// construction, so the writer refuses frames beyond the declared count
/// and [`finish`](TrajectoryWriter::finish) refuses to close early.
///
/// # Examples
///
/// ```
/// use turf_core::CellState;
/// use turf_grid::Snapshot;
/// use turf_replay::{RunDescriptor, TrajectoryWriter};
///
/// let descriptor = RunDescriptor { seed: 7, rows: 1, cols: 2, frame_count: 1 };
/// let mut buf = Vec::new();
/// let mut writer = TrajectoryWriter::new(&mut buf, descriptor).unwrap();
/// writer
///     .write_frame(&Snapshot::new(1, 2, vec![CellState::A, CellState::B]))
///     .unwrap();
/// writer.finish().unwrap();
/// assert!(buf.starts_with(b"TURF"));
/// ```
#[derive(Debug)]
pub struct TrajectoryWriter<W: Write> {
    sink: W,
    descriptor: RunDescriptor,
    written: u32,
}

impl<W: Write> TrajectoryWriter<W> {
    /// Write the header and return a writer expecting
    /// `descriptor.frame_count` frames.
    pub fn new(mut sink: W, descriptor: RunDescriptor) -> Result<Self, ReplayError> {
        codec::encode_header(&mut sink, &descriptor)?;
        Ok(Self {
            sink,
            descriptor,
            written: 0,
        })
    }

    /// Append one frame.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::FrameShapeMismatch`] if the snapshot's
    /// dimensions differ from the header, and
    /// [`ReplayError::FrameCountMismatch`] if the declared count is
    /// already reached.
    pub fn write_frame(&mut self, snapshot: &Snapshot) -> Result<(), ReplayError> {
        if (snapshot.rows(), snapshot.cols()) != (self.descriptor.rows, self.descriptor.cols) {
            return Err(ReplayError::FrameShapeMismatch {
                expected: (self.descriptor.rows, self.descriptor.cols),
                found: (snapshot.rows(), snapshot.cols()),
            });
        }
        if self.written == self.descriptor.frame_count {
            return Err(ReplayError::FrameCountMismatch {
                declared: self.descriptor.frame_count,
                written: self.written + 1,
            });
        }
        codec::encode_frame(&mut self.sink, snapshot)?;
        self.written += 1;
        Ok(())
    }

    /// Flush and consume the writer.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::FrameCountMismatch`] if fewer frames were
    /// written than the header declared.
    pub fn finish(mut self) -> Result<W, ReplayError> {
        if self.written != self.descriptor.frame_count {
            return Err(ReplayError::FrameCountMismatch {
                declared: self.descriptor.frame_count,
                written: self.written,
            });
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}

/// Persist a whole trajectory in one call.
///
/// Derives the descriptor's dimensions and frame count from the frames
/// themselves; `seed` records which run produced them.
///
/// # Errors
///
/// Returns [`ReplayError::EmptyTrajectory`] if `frames` is empty, and
/// any frame-shape or I/O error from the underlying writer.
pub fn write_trajectory<W: Write>(
    sink: W,
    seed: u64,
    frames: &[Snapshot],
) -> Result<W, ReplayError> {
    let first = frames.first().ok_or(ReplayError::EmptyTrajectory)?;
    let descriptor = RunDescriptor {
        seed,
        rows: first.rows(),
        cols: first.cols(),
        frame_count: frames.len() as u32,
    };
    let mut writer = TrajectoryWriter::new(sink, descriptor)?;
    for frame in frames {
        writer.write_frame(frame)?;
    }
    writer.finish()
}
