//! The recorded sequence of interior snapshots.

use turf_grid::Snapshot;

/// An append-only, chronologically ordered record of one run.
///
/// One border-free [`Snapshot`] per completed generation. The driver is
/// the only writer; once a run finishes the trajectory is handed whole to
/// sinks (persistence, playback) and never mutated again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trajectory {
    snapshots: Vec<Snapshot>,
}

impl Trajectory {
    /// An empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot of generation `index` (0-based), if recorded.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Iterate snapshots in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// The trajectory as an ordered slice, the view sinks consume.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
