//! In-memory playback and ASCII rendering.

use turf_core::CellState;
use turf_grid::Snapshot;

/// Steps through a decoded trajectory one frame at a time.
///
/// Playback is a cursor over frames already in memory; it never touches
/// I/O. [`Iterator`] yields `(index, &Snapshot)` pairs in recording
/// order.
#[derive(Debug)]
pub struct Playback<'a> {
    frames: &'a [Snapshot],
    cursor: usize,
}

impl<'a> Playback<'a> {
    /// Start playback at the first frame.
    pub fn new(frames: &'a [Snapshot]) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Total frames in the trajectory.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the trajectory has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Random-access a frame without moving the cursor.
    pub fn frame(&self, index: usize) -> Option<&'a Snapshot> {
        self.frames.get(index)
    }

    /// Rewind to the first frame.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl<'a> Iterator for Playback<'a> {
    type Item = (usize, &'a Snapshot);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.get(self.cursor)?;
        let index = self.cursor;
        self.cursor += 1;
        Some((index, frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frames.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback<'_> {}

/// Render a frame as ASCII, one line per row.
///
/// Empty cells render as `.`, the two populations as `A` and `B`. Each
/// row ends with a newline.
///
/// # Examples
///
/// ```
/// use turf_core::CellState;
/// use turf_grid::Snapshot;
/// use turf_replay::ascii_frame;
///
/// let frame = Snapshot::new(1, 3, vec![CellState::A, CellState::Empty, CellState::B]);
/// assert_eq!(ascii_frame(&frame), "A.B\n");
/// ```
pub fn ascii_frame(frame: &Snapshot) -> String {
    let mut out = String::with_capacity((frame.cols() as usize + 1) * frame.rows() as usize);
    for row in frame.iter_rows() {
        for &cell in row {
            out.push(match cell {
                CellState::Empty => '.',
                CellState::A => 'A',
                CellState::B => 'B',
            });
        }
        out.push('\n');
    }
    out
}
