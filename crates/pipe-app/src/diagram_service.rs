//! Schematic rendering for front ends.

use std::path::Path;

use pipe_graph::PipeGraph;
use pipe_schematic::{SchematicReport, build_report};

use crate::error::AppResult;
use crate::project_service;

/// Switches shared by the rendering commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Reject non-finite or non-positive lengths and diameters up front.
    pub strict: bool,
}

/// Render the full schematic document for an in-memory graph.
pub fn render_diagram(graph: &PipeGraph, options: &RenderOptions) -> AppResult<SchematicReport> {
    if options.strict {
        graph.validate_dimensions()?;
    }
    let report = build_report(graph)?;
    tracing::debug!(
        lines = report.lines.len(),
        drawn = report.drawn_count,
        orphans = report.orphans.len(),
        "rendered schematic"
    );
    Ok(report)
}

/// Load a snapshot file and render it.
pub fn render_snapshot(path: &Path, options: &RenderOptions) -> AppResult<SchematicReport> {
    let graph = project_service::load_graph(path)?;
    render_diagram(&graph, options)
}
