//! Snapshot loading, validation and introspection.

use std::path::Path;

use pipe_graph::PipeGraph;
use pipe_project::ProjectError;
use pipe_project::schema::Snapshot;

use crate::error::{AppError, AppResult};

/// Counts shown after a successful `validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSummary {
    pub name: String,
    pub segment_count: usize,
    pub fitting_count: usize,
    pub tee_count: usize,
    pub elbow_count: usize,
}

/// Load and structurally validate a snapshot file.
pub fn load_snapshot(path: &Path) -> AppResult<Snapshot> {
    let snapshot = pipe_project::load(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::SnapshotFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;
    tracing::debug!(
        path = %path.display(),
        segments = snapshot.segments.len(),
        fittings = snapshot.fittings.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Validate a snapshot and the graph it converts to.
pub fn validate_snapshot(snapshot: &Snapshot) -> AppResult<PipeGraph> {
    pipe_project::validate_snapshot(snapshot).map_err(ProjectError::from)?;
    let graph = pipe_project::to_graph(snapshot)?;
    graph.validate()?;
    Ok(graph)
}

/// Load a snapshot file straight into a graph.
pub fn load_graph(path: &Path) -> AppResult<PipeGraph> {
    let snapshot = load_snapshot(path)?;
    validate_snapshot(&snapshot)
}

pub fn summarize(snapshot: &Snapshot, graph: &PipeGraph) -> SnapshotSummary {
    SnapshotSummary {
        name: snapshot.name.clone(),
        segment_count: graph.segments().len(),
        fitting_count: graph.fittings().len(),
        tee_count: graph.tee_count(),
        elbow_count: graph.elbow_count(),
    }
}
