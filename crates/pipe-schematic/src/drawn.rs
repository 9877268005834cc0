use std::collections::HashSet;

use pipe_core::SegmentId;

/// Segments already emitted by one traversal.
///
/// Owned by a single render call and threaded through it by reference; a new
/// set is created for every render.
#[derive(Debug, Default, Clone)]
pub struct DrawnSet {
    ids: HashSet<SegmentId>,
}

impl DrawnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a segment drawn; returns false if it already was.
    pub fn insert(&mut self, id: SegmentId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
