use std::path::Path;

use pipe_graph::PipeGraph;
use pipe_schematic::LengthSummary;

use crate::diagram_service::RenderOptions;
use crate::error::AppResult;
use crate::project_service;

pub fn length_summary(graph: &PipeGraph, options: &RenderOptions) -> AppResult<LengthSummary> {
    if options.strict {
        graph.validate_dimensions()?;
    }
    Ok(LengthSummary::from_graph(graph)?)
}

pub fn measure_snapshot(path: &Path, options: &RenderOptions) -> AppResult<LengthSummary> {
    let graph = project_service::load_graph(path)?;
    length_summary(&graph, options)
}
