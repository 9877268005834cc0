//! Incremental graph builder.

use std::collections::BTreeSet;

use pipe_core::{FittingId, Real, SegmentId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{self, Fitting, FittingKind, PipeGraph, Segment};
use crate::validate;

#[derive(Debug, Clone, Copy)]
enum Link {
    SegmentFitting(SegmentId, FittingId),
    Fittings(FittingId, FittingId),
    Segments(SegmentId, SegmentId),
}

/// Builder for constructing a graph incrementally.
///
/// Use `add_segment` and `add_fitting` to create entities and the `connect_*`
/// methods to join them, then call `build()` to validate and freeze it into an
/// immutable `PipeGraph`. Every connection is recorded on both sides.
#[derive(Debug, Default)]
pub struct PipeGraphBuilder {
    segments: Vec<Segment>,
    fittings: Vec<Fitting>,
    links: Vec<Link>,
}

impl PipeGraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment (length in feet, diameter in inches) and return its ID.
    pub fn add_segment(&mut self, name: impl Into<String>, length: Real, diameter: Real) -> SegmentId {
        let id = SegmentId::for_slot(self.segments.len());
        self.segments.push(Segment {
            id,
            name: name.into(),
            length,
            diameter,
            connected_fittings: BTreeSet::new(),
            connected_pipes: BTreeSet::new(),
        });
        id
    }

    /// Add a fitting and return its ID.
    pub fn add_fitting(&mut self, name: impl Into<String>, kind: FittingKind) -> FittingId {
        let id = FittingId::for_slot(self.fittings.len());
        self.fittings.push(Fitting {
            id,
            name: name.into(),
            kind,
            connected_pipes: BTreeSet::new(),
            connected_fittings: BTreeSet::new(),
            connection_count: 0,
        });
        id
    }

    /// Record the number of physical connectors on a fitting.
    pub fn set_connection_count(&mut self, fitting: FittingId, count: u32) {
        if let Some(f) = self.fittings.get_mut(fitting.slot()) {
            f.connection_count = count;
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn fitting_count(&self) -> usize {
        self.fittings.len()
    }

    pub fn connect_segment_fitting(&mut self, segment: SegmentId, fitting: FittingId) {
        self.links.push(Link::SegmentFitting(segment, fitting));
    }

    pub fn connect_fittings(&mut self, a: FittingId, b: FittingId) {
        self.links.push(Link::Fittings(a, b));
    }

    /// Join two segments directly, without an intervening fitting.
    pub fn connect_segments(&mut self, a: SegmentId, b: SegmentId) {
        self.links.push(Link::Segments(a, b));
    }

    /// Build and validate the graph, returning an immutable `PipeGraph`.
    pub fn build(mut self) -> GraphResult<PipeGraph> {
        for link in std::mem::take(&mut self.links) {
            self.apply(link)?;
        }

        validate::validate_symmetry(&self.segments, &self.fittings)?;

        let (segment_fitting_offsets, segment_fittings) =
            graph::build_adjacency(&self.segments, &self.fittings);

        Ok(PipeGraph {
            segments: self.segments,
            fittings: self.fittings,
            segment_fitting_offsets,
            segment_fittings,
        })
    }

    fn apply(&mut self, link: Link) -> GraphResult<()> {
        match link {
            Link::SegmentFitting(s, f) => {
                self.segment_mut(s)?.connected_fittings.insert(f);
                self.fitting_mut(f)?.connected_pipes.insert(s);
            }
            Link::Fittings(a, b) => {
                if a == b {
                    return Err(GraphError::SelfLink {
                        what: "Fitting",
                        id: a,
                    });
                }
                self.fitting_mut(a)?.connected_fittings.insert(b);
                self.fitting_mut(b)?.connected_fittings.insert(a);
            }
            Link::Segments(a, b) => {
                if a == b {
                    return Err(GraphError::SelfLink {
                        what: "Segment",
                        id: a,
                    });
                }
                self.segment_mut(a)?.connected_pipes.insert(b);
                self.segment_mut(b)?.connected_pipes.insert(a);
            }
        }
        Ok(())
    }

    fn segment_mut(&mut self, id: SegmentId) -> GraphResult<&mut Segment> {
        self.segments
            .get_mut(id.slot())
            .ok_or(GraphError::UnknownSegment { segment: id })
    }

    fn fitting_mut(&mut self, id: FittingId) -> GraphResult<&mut Fitting> {
        self.fittings
            .get_mut(id.slot())
            .ok_or(GraphError::UnknownFitting { fitting: id })
    }
}
