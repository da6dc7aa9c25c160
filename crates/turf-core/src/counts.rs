//! Neighbour occupancy counts consumed by the transition rules.

/// How many `A` and `B` cells surround a grid position.
///
/// Produced by the neighbourhood sampler and consumed by the transition
/// rules. The counts are bounded by the neighbourhood size (4 for von
/// Neumann, 8 for Moore), so `u8` is always sufficient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighbourCounts {
    /// Number of neighbouring cells holding `A`.
    pub a: u8,
    /// Number of neighbouring cells holding `B`.
    pub b: u8,
}

impl NeighbourCounts {
    /// Construct counts directly.
    pub const fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    /// Total occupied neighbours.
    pub const fn total(self) -> u8 {
        self.a + self.b
    }

    /// A contested tie: equal nonzero counts on both sides.
    ///
    /// An all-zero neighbourhood is deliberately *not* a tie: the
    /// tie-break rule treats it as uncontested and leaves the cell alone.
    pub const fn is_contested_tie(self) -> bool {
        self.a == self.b && self.a != 0
    }
}
