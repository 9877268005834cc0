//! Core graph data structures.

use std::collections::BTreeSet;

use pipe_core::{FittingId, Real, SegmentId};

use crate::error::{GraphError, GraphResult};
use crate::validate;

/// Classification of a fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FittingKind {
    /// Branch point; never merged into an accumulated run.
    Tee,
    Elbow,
    Coupling,
    Cap,
    /// Anything the catalog name doesn't identify (reducers, unions, ...).
    Generic,
}

impl FittingKind {
    /// Classify a fitting from its catalog family and type names.
    ///
    /// Matching is a case-insensitive substring test, checked in the order
    /// tee, elbow, coupling, cap.
    pub fn classify(family_name: &str, type_name: &str) -> Self {
        let family = family_name.to_lowercase();
        let ty = type_name.to_lowercase();
        let has = |needle: &str| family.contains(needle) || ty.contains(needle);

        if has("tee") {
            FittingKind::Tee
        } else if has("elbow") {
            FittingKind::Elbow
        } else if has("coupling") {
            FittingKind::Coupling
        } else if has("cap") {
            FittingKind::Cap
        } else {
            FittingKind::Generic
        }
    }

    /// Short label used in text output.
    pub fn label(self) -> &'static str {
        match self {
            FittingKind::Tee => "T",
            FittingKind::Elbow => "Elbow",
            FittingKind::Coupling => "Coupling",
            FittingKind::Cap => "Cap",
            FittingKind::Generic => "Fitting",
        }
    }
}

/// A single pipe run between two connection points.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub name: String,
    /// Length in feet.
    pub length: Real,
    /// Nominal diameter in inches.
    pub diameter: Real,
    pub connected_fittings: BTreeSet<FittingId>,
    /// Segments joined directly, without a fitting in between.
    pub connected_pipes: BTreeSet<SegmentId>,
}

/// A junction element joining segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Fitting {
    pub id: FittingId,
    pub name: String,
    pub kind: FittingKind,
    pub connected_pipes: BTreeSet<SegmentId>,
    pub connected_fittings: BTreeSet<FittingId>,
    /// Number of physical connectors on the fitting, used or not.
    pub connection_count: u32,
}

impl Fitting {
    pub fn is_tee(&self) -> bool {
        self.kind == FittingKind::Tee
    }

    /// A non-Tee fitting joining exactly two segments; candidate for run accumulation.
    pub fn is_non_branching(&self) -> bool {
        !self.is_tee() && self.connected_pipes.len() == 2
    }
}

/// The graph: an immutable snapshot of segments and fittings.
///
/// The graph stores:
/// - All segments and fittings in vectors (indexed by their IDs).
/// - Compact reverse adjacency: for each segment, which fittings list it.
///
/// Adjacency sets may name ids that don't resolve when the graph was
/// assembled with [`PipeGraph::from_parts`]; lookups return `None` for those.
#[derive(Debug, Clone)]
pub struct PipeGraph {
    pub(crate) segments: Vec<Segment>,
    pub(crate) fittings: Vec<Fitting>,

    /// Offsets for segment->fitting adjacency: segment i's fittings are in
    /// segment_fittings[segment_fitting_offsets[i]..segment_fitting_offsets[i+1]].
    pub(crate) segment_fitting_offsets: Vec<usize>,

    /// Flat list of fitting IDs touching each segment (sorted by segment ID then fitting ID).
    pub(crate) segment_fittings: Vec<FittingId>,
}

impl PipeGraph {
    /// Assemble a graph from pre-populated tables.
    ///
    /// Only positional ids are checked; adjacency is taken as supplied.
    /// Call [`PipeGraph::validate`] for a full structural check.
    pub fn from_parts(segments: Vec<Segment>, fittings: Vec<Fitting>) -> GraphResult<Self> {
        for (position, segment) in segments.iter().enumerate() {
            if segment.id.slot() != position {
                return Err(GraphError::IdMismatch {
                    what: "Segment",
                    position,
                    id: segment.id,
                });
            }
        }
        for (position, fitting) in fittings.iter().enumerate() {
            if fitting.id.slot() != position {
                return Err(GraphError::IdMismatch {
                    what: "Fitting",
                    position,
                    id: fitting.id,
                });
            }
        }

        let (segment_fitting_offsets, segment_fittings) = build_adjacency(&segments, &fittings);
        Ok(Self {
            segments,
            fittings,
            segment_fitting_offsets,
            segment_fittings,
        })
    }

    /// Check references and symmetry of every adjacency set.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_symmetry(&self.segments, &self.fittings)
    }

    /// Reject non-finite or non-positive lengths and diameters.
    pub fn validate_dimensions(&self) -> GraphResult<()> {
        validate::validate_dimensions(&self.segments)
    }

    /// Return all segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Return all fittings.
    pub fn fittings(&self) -> &[Fitting] {
        &self.fittings
    }

    /// Get a segment by ID (returns None if ID out of bounds).
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.slot())
    }

    /// Get a fitting by ID (returns None if ID out of bounds).
    pub fn fitting(&self, id: FittingId) -> Option<&Fitting> {
        self.fittings.get(id.slot())
    }

    /// Fittings that list the given segment among their connected pipes, in ID order.
    pub fn fittings_at(&self, segment_id: SegmentId) -> &[FittingId] {
        let idx = segment_id.slot();
        if idx >= self.segments.len() {
            return &[];
        }
        let start = self.segment_fitting_offsets[idx];
        let end = self.segment_fitting_offsets[idx + 1];
        &self.segment_fittings[start..end]
    }

    pub fn count_kind(&self, kind: FittingKind) -> usize {
        self.fittings.iter().filter(|f| f.kind == kind).count()
    }

    pub fn tee_count(&self) -> usize {
        self.count_kind(FittingKind::Tee)
    }

    pub fn elbow_count(&self) -> usize {
        self.count_kind(FittingKind::Elbow)
    }

    /// Sum of all segment lengths, in feet.
    pub fn total_length(&self) -> Real {
        self.segments.iter().map(|s| s.length).sum()
    }
}

/// Build compact adjacency lists: for each segment, collect the fittings that list it.
pub(crate) fn build_adjacency(
    segments: &[Segment],
    fittings: &[Fitting],
) -> (Vec<usize>, Vec<FittingId>) {
    let mut per_segment: Vec<Vec<FittingId>> = vec![Vec::new(); segments.len()];
    // Fittings are visited in ID order, so each list comes out sorted.
    for fitting in fittings {
        for pipe in &fitting.connected_pipes {
            if let Some(list) = per_segment.get_mut(pipe.slot()) {
                list.push(fitting.id);
            }
        }
    }

    let mut offsets = Vec::with_capacity(segments.len() + 1);
    let mut flat = Vec::new();
    offsets.push(0);
    for list in per_segment {
        flat.extend(list);
        offsets.push(flat.len());
    }

    (offsets, flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipe_core::Id;

    fn fitting(index: u32, kind: FittingKind, pipes: &[u32]) -> Fitting {
        Fitting {
            id: Id::from_index(index),
            name: format!("F{index}"),
            kind,
            connected_pipes: pipes.iter().map(|&p| Id::from_index(p)).collect(),
            connected_fittings: BTreeSet::new(),
            connection_count: pipes.len() as u32,
        }
    }

    fn segment(index: u32) -> Segment {
        Segment {
            id: Id::from_index(index),
            name: format!("S{index}"),
            length: 1.0,
            diameter: 1.0,
            connected_fittings: BTreeSet::new(),
            connected_pipes: BTreeSet::new(),
        }
    }

    #[test]
    fn classify_by_family_or_type_name() {
        assert_eq!(FittingKind::classify("Tee - Generic", ""), FittingKind::Tee);
        assert_eq!(FittingKind::classify("Fitting", "90 ELBOW"), FittingKind::Elbow);
        assert_eq!(FittingKind::classify("Coupling - PVC", ""), FittingKind::Coupling);
        assert_eq!(FittingKind::classify("End Cap", "Standard"), FittingKind::Cap);
        assert_eq!(FittingKind::classify("Reducer", "Concentric"), FittingKind::Generic);
        // Tee wins over anything matched later.
        assert_eq!(FittingKind::classify("Elbow", "Tee"), FittingKind::Tee);
    }

    #[test]
    fn non_branching_requires_two_pipes_and_no_tee() {
        assert!(fitting(0, FittingKind::Elbow, &[0, 1]).is_non_branching());
        assert!(fitting(0, FittingKind::Generic, &[0, 1]).is_non_branching());
        assert!(!fitting(0, FittingKind::Tee, &[0, 1]).is_non_branching());
        assert!(!fitting(0, FittingKind::Coupling, &[0]).is_non_branching());
        assert!(!fitting(0, FittingKind::Generic, &[0, 1, 2]).is_non_branching());
    }

    #[test]
    fn from_parts_rejects_misplaced_ids() {
        let err = PipeGraph::from_parts(vec![segment(1)], vec![]).unwrap_err();
        assert!(matches!(err, GraphError::IdMismatch { position: 0, .. }));
    }

    #[test]
    fn reverse_adjacency_skips_unknown_segments() {
        let graph = PipeGraph::from_parts(
            vec![segment(0), segment(1)],
            vec![
                fitting(0, FittingKind::Elbow, &[0, 1]),
                fitting(1, FittingKind::Cap, &[1, 9]),
            ],
        )
        .unwrap();

        assert_eq!(graph.fittings_at(Id::from_index(0)), &[Id::from_index(0)]);
        assert_eq!(
            graph.fittings_at(Id::from_index(1)),
            &[Id::from_index(0), Id::from_index(1)]
        );
        assert!(graph.fittings_at(Id::from_index(9)).is_empty());
        assert!(graph.segment(Id::from_index(9)).is_none());
    }
}
