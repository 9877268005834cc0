//! Walking corridors of non-branching fittings.

use std::collections::HashSet;

use pipe_core::{FittingId, SegmentId};
use pipe_graph::{FittingKind, PipeGraph};

/// Where a chain walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStep {
    /// The next segment reached, or `None` at a tee or dead end.
    pub next: Option<SegmentId>,
    /// The last fitting the walk stood on.
    pub last_fitting: FittingId,
}

/// Follow fittings from `start_fitting` (reached from `from_segment`) until a
/// segment other than `from_segment` is found.
///
/// Tees are never crossed. Every elbow stepped onto after the starting
/// fitting bumps `elbows`; the caller accounts for the starting fitting.
/// Each fitting is entered at most once, so cycles in the fitting subgraph
/// terminate as dead ends.
pub fn walk_chain(
    graph: &PipeGraph,
    from_segment: SegmentId,
    start_fitting: FittingId,
    elbows: &mut u32,
) -> ChainStep {
    let mut current = start_fitting;
    let mut previous: Option<FittingId> = None;
    let mut visited: HashSet<FittingId> = HashSet::from([start_fitting]);

    loop {
        let stop = ChainStep {
            next: None,
            last_fitting: current,
        };
        let Some(fitting) = graph.fitting(current) else {
            return stop;
        };
        if fitting.is_tee() {
            return stop;
        }

        // First resolvable segment other than the one we left.
        let next_segment = fitting
            .connected_pipes
            .iter()
            .copied()
            .find(|&id| id != from_segment && graph.segment(id).is_some());
        if let Some(next) = next_segment {
            return ChainStep {
                next: Some(next),
                last_fitting: current,
            };
        }

        let next_fitting = fitting
            .connected_fittings
            .iter()
            .copied()
            .filter(|&id| Some(id) != previous && !visited.contains(&id))
            .filter_map(|id| graph.fitting(id))
            .find(|f| !f.is_tee());
        let Some(next) = next_fitting else {
            return stop;
        };

        if next.kind == FittingKind::Elbow {
            *elbows += 1;
        }
        visited.insert(next.id);
        previous = Some(current);
        current = next.id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipe_graph::PipeGraphBuilder;

    #[test]
    fn single_fitting_hop() {
        let mut b = PipeGraphBuilder::new();
        let x = b.add_segment("X", 4.0, 2.0);
        let y = b.add_segment("Y", 3.0, 2.0);
        let e = b.add_fitting("E", FittingKind::Elbow);
        b.connect_segment_fitting(x, e);
        b.connect_segment_fitting(y, e);
        let graph = b.build().unwrap();

        let mut elbows = 0;
        let step = walk_chain(&graph, x, e, &mut elbows);
        assert_eq!(
            step,
            ChainStep {
                next: Some(y),
                last_fitting: e
            }
        );
        // The starting fitting is the caller's to count.
        assert_eq!(elbows, 0);
    }

    #[test]
    fn stops_at_tee() {
        let mut b = PipeGraphBuilder::new();
        let x = b.add_segment("X", 4.0, 2.0);
        let y = b.add_segment("Y", 3.0, 2.0);
        let t = b.add_fitting("T", FittingKind::Tee);
        b.connect_segment_fitting(x, t);
        b.connect_segment_fitting(y, t);
        let graph = b.build().unwrap();

        let mut elbows = 0;
        let step = walk_chain(&graph, x, t, &mut elbows);
        assert_eq!(step.next, None);
        assert_eq!(step.last_fitting, t);
    }

    #[test]
    fn crosses_fitting_to_fitting_corridor() {
        // X - E0 - E1 - C - Y, with fittings joined directly
        let mut b = PipeGraphBuilder::new();
        let x = b.add_segment("X", 4.0, 2.0);
        let y = b.add_segment("Y", 3.0, 2.0);
        let e0 = b.add_fitting("E0", FittingKind::Elbow);
        let e1 = b.add_fitting("E1", FittingKind::Elbow);
        let c = b.add_fitting("C", FittingKind::Coupling);
        b.connect_segment_fitting(x, e0);
        b.connect_fittings(e0, e1);
        b.connect_fittings(e1, c);
        b.connect_segment_fitting(y, c);
        let graph = b.build().unwrap();

        let mut elbows = 0;
        let step = walk_chain(&graph, x, e0, &mut elbows);
        assert_eq!(step.next, Some(y));
        assert_eq!(step.last_fitting, c);
        assert_eq!(elbows, 1);
    }

    #[test]
    fn does_not_step_onto_tee_fittings() {
        let mut b = PipeGraphBuilder::new();
        let x = b.add_segment("X", 4.0, 2.0);
        let y = b.add_segment("Y", 3.0, 2.0);
        let c = b.add_fitting("C", FittingKind::Coupling);
        let t = b.add_fitting("T", FittingKind::Tee);
        b.connect_segment_fitting(x, c);
        b.connect_fittings(c, t);
        b.connect_segment_fitting(y, t);
        let graph = b.build().unwrap();

        let mut elbows = 0;
        let step = walk_chain(&graph, x, c, &mut elbows);
        assert_eq!(step.next, None);
        assert_eq!(step.last_fitting, c);
    }

    #[test]
    fn three_fitting_cycle_terminates() {
        // X hangs off E0; E0, E1, E2 form a ring with no other pipes.
        let mut b = PipeGraphBuilder::new();
        let x = b.add_segment("X", 4.0, 2.0);
        let e0 = b.add_fitting("E0", FittingKind::Elbow);
        let e1 = b.add_fitting("E1", FittingKind::Elbow);
        let e2 = b.add_fitting("E2", FittingKind::Elbow);
        b.connect_segment_fitting(x, e0);
        b.connect_fittings(e0, e1);
        b.connect_fittings(e1, e2);
        b.connect_fittings(e2, e0);
        let graph = b.build().unwrap();

        let mut elbows = 0;
        let step = walk_chain(&graph, x, e0, &mut elbows);
        assert_eq!(step.next, None);
        assert_eq!(step.last_fitting, e2);
        assert_eq!(elbows, 2);
    }

    #[test]
    fn unknown_start_fitting_is_a_dead_end() {
        let mut b = PipeGraphBuilder::new();
        let x = b.add_segment("X", 4.0, 2.0);
        let graph = b.build().unwrap();

        let mut elbows = 0;
        let missing = FittingId::from_index(42);
        let step = walk_chain(&graph, x, missing, &mut elbows);
        assert_eq!(step.next, None);
        assert_eq!(step.last_fitting, missing);
    }
}
