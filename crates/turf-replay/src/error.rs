//! Error types for trajectory persistence.

use std::fmt;
use std::io;

use turf_core::InvalidCellValue;

/// Errors during trajectory recording or playback.
#[derive(Debug)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream does not start with the `b"TURF"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the stream.
        found: u16,
    },
    /// A frame's dimensions do not match the header.
    FrameShapeMismatch {
        /// Rows and columns declared in the header.
        expected: (u32, u32),
        /// Rows and columns of the offending frame.
        found: (u32, u32),
    },
    /// Fewer or more frames were written than the header declared.
    FrameCountMismatch {
        /// Frame count declared in the header.
        declared: u32,
        /// Frames actually written.
        written: u32,
    },
    /// A frame contained a byte outside the cell domain.
    InvalidCell(InvalidCellValue),
    /// Attempted to persist a trajectory with no frames.
    EmptyTrajectory,
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"TURF\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::FrameShapeMismatch { expected, found } => write!(
                f,
                "frame is {}x{}, header declares {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::FrameCountMismatch { declared, written } => write!(
                f,
                "header declares {declared} frames, {written} written"
            ),
            Self::InvalidCell(e) => write!(f, "corrupt frame: {e}"),
            Self::EmptyTrajectory => write!(f, "trajectory has no frames"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidCell(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<InvalidCellValue> for ReplayError {
    fn from(e: InvalidCellValue) -> Self {
        Self::InvalidCell(e)
    }
}
