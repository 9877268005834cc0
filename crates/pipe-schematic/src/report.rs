//! The full schematic document: inventories, tree, orphans and summary.

use std::fmt;

use pipe_core::{Real, SegmentId};
use pipe_graph::{PipeGraph, Segment};

use crate::diameter::{format_diameter, size_label};
use crate::drawn::DrawnSet;
use crate::error::SchematicResult;
use crate::orphans::{ORPHAN_HEADER, collect_orphans, drawn_footer, orphan_lines};
use crate::root::select_root;
use crate::tree::{TreeLine, render_tree};

/// System-wide totals shown on the last line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemSummary {
    /// Sum of all segment lengths, in feet.
    pub total_length: Real,
    pub pipe_count: usize,
    pub tee_count: usize,
    pub elbow_count: usize,
}

impl SystemSummary {
    pub fn from_graph(graph: &PipeGraph) -> Self {
        Self {
            total_length: graph.total_length(),
            pipe_count: graph.segments().len(),
            tee_count: graph.tee_count(),
            elbow_count: graph.elbow_count(),
        }
    }
}

impl fmt::Display for SystemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Length: {:.2} ft  |  Pipes: {}  |  T-Fittings: {}  |  Elbows: {}",
            self.total_length, self.pipe_count, self.tee_count, self.elbow_count
        )
    }
}

/// Rendered schematic plus the structured data behind it.
#[derive(Debug, Clone)]
pub struct SchematicReport {
    /// Every output line, in order.
    pub lines: Vec<String>,
    pub root: SegmentId,
    pub tree: Vec<TreeLine>,
    /// Unreached segments in listing order.
    pub orphans: Vec<SegmentId>,
    pub drawn_count: usize,
    pub summary: SystemSummary,
}

impl SchematicReport {
    pub fn text(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Build the complete document for one graph snapshot.
///
/// Fails with `EmptyGraph` before producing any output when there are no segments.
pub fn build_report(graph: &PipeGraph) -> SchematicResult<SchematicReport> {
    let root = select_root(graph)?.id;
    let summary = SystemSummary::from_graph(graph);

    let mut lines = Vec::new();
    lines.push("=== DEBUG INFORMATION ===".to_string());
    lines.push(format!("Total Pipes: {}", summary.pipe_count));
    lines.push(format!("Total T-Fittings: {}", summary.tee_count));
    lines.push(String::new());
    tee_inventory(graph, &mut lines);
    segment_inventory(graph, &mut lines);
    fitting_inventory(graph, &mut lines);

    lines.push("=== PIPE SYSTEM TREE ===".to_string());
    lines.push(String::new());

    let mut drawn = DrawnSet::new();
    let tree = render_tree(graph, root, &mut drawn);
    lines.extend(tree.iter().map(|line| line.text.clone()));

    let orphans = collect_orphans(graph, &drawn);
    if !orphans.is_empty() {
        lines.push(String::new());
        lines.push(ORPHAN_HEADER.to_string());
        lines.extend(orphan_lines(&orphans));
    }

    lines.push(String::new());
    lines.push(drawn_footer(drawn.len(), summary.pipe_count));
    lines.push(String::new());
    lines.push(summary.to_string());

    Ok(SchematicReport {
        lines,
        root,
        tree,
        orphans: orphans.iter().map(|s| s.id).collect(),
        drawn_count: drawn.len(),
        summary,
    })
}

fn tee_inventory(graph: &PipeGraph, lines: &mut Vec<String>) {
    lines.push("T-Fittings and their connected pipes:".to_string());
    let tees = graph.fittings().iter().filter(|f| f.is_tee());
    for (i, tee) in tees.enumerate() {
        lines.push(format!(
            "  T-Fitting {}: connects {} pipes, {} fittings",
            i + 1,
            tee.connected_pipes.len(),
            tee.connected_fittings.len()
        ));
        for segment in tee.connected_pipes.iter().filter_map(|&id| graph.segment(id)) {
            lines.push(format!("    - Pipe: {}", size_label(segment.diameter, segment.length)));
        }
        for fitting in tee
            .connected_fittings
            .iter()
            .filter_map(|&id| graph.fitting(id))
        {
            lines.push(format!("    - Fitting: {}", fitting.kind.label()));
        }
    }
    lines.push(String::new());
}

fn segment_inventory(graph: &PipeGraph, lines: &mut Vec<String>) {
    lines.push("All Pipes:".to_string());
    let mut segments: Vec<&Segment> = graph.segments().iter().collect();
    segments.sort_by(|a, b| b.diameter.total_cmp(&a.diameter));
    for s in segments {
        lines.push(format!(
            "  {} ø | {:.1} ft - Connects to {} fittings, {} pipes",
            format_diameter(s.diameter),
            s.length,
            s.connected_fittings.len(),
            s.connected_pipes.len()
        ));
    }
    lines.push(String::new());
}

fn fitting_inventory(graph: &PipeGraph, lines: &mut Vec<String>) {
    lines.push("All Fittings:".to_string());
    let mut fittings: Vec<_> = graph.fittings().iter().collect();
    fittings.sort_by_key(|f| f.kind.label());
    for f in fittings {
        lines.push(format!(
            "  {}: connects {} pipes, {} fittings",
            f.kind.label(),
            f.connected_pipes.len(),
            f.connected_fittings.len()
        ));
    }
    lines.push(String::new());
}
