//! Total pipe length summary with alternate units.

use pipe_core::{Length, ft, in_ft, in_inches, in_m};
use pipe_graph::PipeGraph;

use crate::error::{SchematicError, SchematicResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthSummary {
    pub total: Length,
    pub pipe_count: usize,
    pub elbow_count: usize,
}

impl LengthSummary {
    /// Sum every segment's length and count elbow fittings.
    pub fn from_graph(graph: &PipeGraph) -> SchematicResult<Self> {
        if graph.segments().is_empty() {
            return Err(SchematicError::EmptyGraph);
        }
        Ok(Self {
            total: ft(graph.total_length()),
            pipe_count: graph.segments().len(),
            elbow_count: graph.elbow_count(),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Total Pipe Length: {:.2} ft", in_ft(self.total)),
            format!("Number of Pipes: {}", self.pipe_count),
            format!("Number of Elbows: {}", self.elbow_count),
            String::new(),
            "Alternate Units:".to_string(),
            format!("  {:.2} ft", in_ft(self.total)),
            format!("  {:.2} in", in_inches(self.total)),
            format!("  {:.2} m", in_m(self.total)),
        ]
    }
}
