use core::fmt;
use core::num::NonZeroU32;

/// Position of a segment or fitting in its graph table, stored off by one.
///
/// The zero niche makes `Option<Id>` (an optional "came from" fitting, say)
/// the same size as `Id`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Indices at `u32::MAX` saturate onto the last representable id.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Id for the entry that will sit at `slot` in a table.
    pub fn for_slot(slot: usize) -> Self {
        Self::from_index(u32::try_from(slot).unwrap_or(u32::MAX))
    }

    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Table position, for indexing the segment or fitting vectors.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

pub type SegmentId = Id;
pub type FittingId = Id;
