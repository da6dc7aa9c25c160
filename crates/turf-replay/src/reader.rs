//! Trajectory decoding.

use std::io::Read;

use crate::codec;
use crate::error::ReplayError;
use crate::RunDescriptor;
use turf_grid::Snapshot;

/// Decodes a trajectory stream frame by frame.
///
/// Construction validates the magic and version and reads the header;
/// [`next_frame`](TrajectoryReader::next_frame) then yields exactly the
/// declared number of frames. A stream that ends before the declared
/// count surfaces as an I/O error from the truncated read.
#[derive(Debug)]
pub struct TrajectoryReader<R: Read> {
    source: R,
    descriptor: RunDescriptor,
    read: u32,
}

impl<R: Read> TrajectoryReader<R> {
    /// Validate the stream prefix and read the header.
    pub fn new(mut source: R) -> Result<Self, ReplayError> {
        let descriptor = codec::decode_header(&mut source)?;
        Ok(Self {
            source,
            descriptor,
            read: 0,
        })
    }

    /// The header's run parameters.
    pub fn descriptor(&self) -> &RunDescriptor {
        &self.descriptor
    }

    /// Decode the next frame, or `None` once the declared count is read.
    pub fn next_frame(&mut self) -> Result<Option<Snapshot>, ReplayError> {
        if self.read == self.descriptor.frame_count {
            return Ok(None);
        }
        let frame = codec::decode_frame(&mut self.source, &self.descriptor)?;
        self.read += 1;
        Ok(Some(frame))
    }

    /// Decode all remaining frames.
    pub fn read_all(&mut self) -> Result<Vec<Snapshot>, ReplayError> {
        let remaining = (self.descriptor.frame_count - self.read) as usize;
        let mut frames = Vec::with_capacity(remaining);
        while let Some(frame) = self.next_frame()? {
            frames.push(frame);
        }
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_trajectory;
    use turf_core::CellState;

    fn recorded() -> Vec<u8> {
        let frames = vec![
            Snapshot::new(1, 3, vec![CellState::A, CellState::Empty, CellState::B]),
            Snapshot::new(1, 3, vec![CellState::B, CellState::B, CellState::A]),
        ];
        write_trajectory(Vec::new(), 17, &frames).unwrap()
    }

    #[test]
    fn replays_what_was_recorded() {
        let buf = recorded();
        let mut reader = TrajectoryReader::new(buf.as_slice()).unwrap();
        assert_eq!(reader.descriptor().seed, 17);
        assert_eq!(reader.descriptor().frame_count, 2);

        let frames = reader.read_all().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].get(0, 0), Some(CellState::A));
        assert_eq!(frames[1].get(0, 2), Some(CellState::A));
    }

    #[test]
    fn stops_at_declared_count() {
        let buf = recorded();
        let mut reader = TrajectoryReader::new(buf.as_slice()).unwrap();
        assert!(reader.next_frame().unwrap().is_some());
        assert!(reader.next_frame().unwrap().is_some());
        assert!(reader.next_frame().unwrap().is_none());
        assert!(reader.next_frame().unwrap().is_none());
    }

    #[test]
    fn truncated_stream_errors() {
        let mut buf = recorded();
        buf.truncate(buf.len() - 2);
        let mut reader = TrajectoryReader::new(buf.as_slice()).unwrap();
        assert!(reader.next_frame().unwrap().is_some());
        assert!(matches!(reader.next_frame(), Err(ReplayError::Io(_))));
    }

    #[test]
    fn garbage_prefix_rejected() {
        assert!(matches!(
            TrajectoryReader::new(&b"not a trajectory"[..]),
            Err(ReplayError::InvalidMagic)
        ));
    }
}
