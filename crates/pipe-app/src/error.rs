//! Error types for the pipe-app service layer.

use std::path::PathBuf;

/// Unified error for CLI and any other front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read snapshot file: {path}")]
    SnapshotFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Snapshot error: {0}")]
    Project(String),

    #[error("Graph error: {0}")]
    Graph(#[from] pipe_graph::GraphError),

    #[error("{0}")]
    Schematic(#[from] pipe_schematic::SchematicError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<pipe_project::ProjectError> for AppError {
    fn from(err: pipe_project::ProjectError) -> Self {
        match err {
            pipe_project::ProjectError::Graph(graph) => AppError::Graph(graph),
            other => AppError::Project(other.to_string()),
        }
    }
}
