//! Merging straight same-diameter runs into one tree node.

use pipe_core::{FittingId, Real, SegmentId, same_diameter};
use pipe_graph::{Fitting, FittingKind, PipeGraph, Segment};

use crate::chain::walk_chain;
use crate::drawn::DrawnSet;

/// A run of segments rendered as one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Constituent segments in walk order; the first is the run's start.
    pub segments: Vec<SegmentId>,
    pub total_length: Real,
    /// Diameter of the starting segment; every member is within tolerance of it.
    pub diameter: Real,
    pub elbow_count: u32,
    pub final_segment: SegmentId,
    /// Fitting the run last passed through (or entered from, if it never grew).
    pub last_fitting: Option<FittingId>,
}

/// Grow a run from `start` through non-branching fittings.
///
/// `start` must already be marked drawn. Each accepted segment is marked
/// drawn as it joins. A candidate is rejected when the chain walk finds no
/// segment, finds one already drawn, or finds a different diameter; the
/// fitting is then left for the tree builder to branch into.
///
/// Every elbow examined while looking for a continuation counts toward the
/// run, whether or not the hop through it is accepted.
pub fn accumulate(
    graph: &PipeGraph,
    start: &Segment,
    came_from: Option<FittingId>,
    drawn: &mut DrawnSet,
) -> Run {
    let mut run = Run {
        segments: vec![start.id],
        total_length: start.length,
        diameter: start.diameter,
        elbow_count: 0,
        final_segment: start.id,
        last_fitting: came_from,
    };

    let mut elbows = 0;
    while let Some((next, via)) = next_in_run(graph, &run, drawn, &mut elbows) {
        run.total_length += next.length;
        run.segments.push(next.id);
        run.final_segment = next.id;
        run.last_fitting = Some(via);
        drawn.insert(next.id);
    }
    run.elbow_count = elbows;

    if run.segments.len() > 1 {
        tracing::debug!(
            start = %start.id,
            segments = run.segments.len(),
            length = run.total_length,
            elbows = run.elbow_count,
            "merged run"
        );
    }
    run
}

/// Find the first acceptable continuation of the run's final segment,
/// adding every elbow examined on the way to `elbows`.
fn next_in_run<'g>(
    graph: &'g PipeGraph,
    run: &Run,
    drawn: &DrawnSet,
    elbows: &mut u32,
) -> Option<(&'g Segment, FittingId)> {
    let candidates = graph
        .fittings_at(run.final_segment)
        .iter()
        .copied()
        .filter(|&id| Some(id) != run.last_fitting)
        .filter_map(|id| graph.fitting(id))
        .filter(|f| f.is_non_branching());

    for fitting in candidates {
        *elbows += elbow_weight(fitting);
        let step = walk_chain(graph, run.final_segment, fitting.id, elbows);

        let Some(next) = step.next.and_then(|id| graph.segment(id)) else {
            continue;
        };
        if drawn.contains(next.id) || !same_diameter(next.diameter, run.diameter) {
            continue;
        }
        return Some((next, step.last_fitting));
    }
    None
}

fn elbow_weight(fitting: &Fitting) -> u32 {
    u32::from(fitting.kind == FittingKind::Elbow)
}
