/// Stable handle to an object in a [`Scene`](super::Scene).
///
/// Ids are generational: removing an object bumps its slot's generation, so
/// a stale id never resolves to whatever reuses the slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl ObjectId {
    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index, useful for diagnostics only.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }
}
