//! Segments the tree traversal never reached.

use pipe_graph::{PipeGraph, Segment};

use crate::diameter::size_label;
use crate::drawn::DrawnSet;
use crate::root::size_order;

pub const ORPHAN_HEADER: &str = "=== Additional Pipes (not connected to main tree) ===";

/// Undrawn segments, largest diameter first, then longest.
pub fn collect_orphans<'g>(graph: &'g PipeGraph, drawn: &DrawnSet) -> Vec<&'g Segment> {
    let mut orphans: Vec<&Segment> = graph
        .segments()
        .iter()
        .filter(|s| !drawn.contains(s.id))
        .collect();
    orphans.sort_by(|a, b| size_order(a, b));

    if !orphans.is_empty() {
        tracing::warn!(
            count = orphans.len(),
            "segments not reachable from the root"
        );
    }
    orphans
}

/// Flat listing: one entry per orphan plus its fitting count when non-zero.
pub fn orphan_lines(orphans: &[&Segment]) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in orphans {
        lines.push(format!("• {}", size_label(segment.diameter, segment.length)));
        let fittings = segment.connected_fittings.len();
        if fittings > 0 {
            lines.push(format!("  Connected to {fittings} fitting(s)"));
        }
    }
    lines
}

pub fn drawn_footer(drawn: usize, total: usize) -> String {
    format!("Total pipes drawn in tree: {drawn}/{total}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipe_graph::{FittingKind, PipeGraphBuilder};

    #[test]
    fn orphans_sorted_by_diameter_then_length() {
        let mut b = PipeGraphBuilder::new();
        let a = b.add_segment("A", 1.0, 1.0);
        b.add_segment("B", 2.0, 1.0);
        b.add_segment("C", 0.5, 3.0);
        let graph = b.build().unwrap();

        let mut drawn = DrawnSet::new();
        drawn.insert(a);
        let orphans = collect_orphans(&graph, &drawn);
        let names: Vec<_> = orphans.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["C", "B"]);
    }

    #[test]
    fn lines_mention_fitting_count() {
        let mut b = PipeGraphBuilder::new();
        let a = b.add_segment("A", 4.0, 1.5);
        let cap = b.add_fitting("Cap", FittingKind::Cap);
        b.connect_segment_fitting(a, cap);
        b.add_segment("B", 2.0, 0.5);
        let graph = b.build().unwrap();

        let orphans = collect_orphans(&graph, &DrawnSet::new());
        assert_eq!(
            orphan_lines(&orphans),
            [
                "• 1-1/2\" ø  |  4.0 ft",
                "  Connected to 1 fitting(s)",
                "• 1/2\" ø  |  2.0 ft",
            ]
        );
        assert_eq!(drawn_footer(3, 5), "Total pipes drawn in tree: 3/5");
    }
}
