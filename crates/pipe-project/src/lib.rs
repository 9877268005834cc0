//! pipe-project: snapshot file format for pipe connectivity, plus loading,
//! validation and conversion into a [`pipe_graph::PipeGraph`].

pub mod convert;
pub mod schema;
pub mod validate;

pub use convert::to_graph;
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_snapshot};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] pipe_graph::GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Snapshot> {
    let content = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_yaml::from_str(&content)?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

pub fn save_yaml(path: &Path, snapshot: &Snapshot) -> ProjectResult<()> {
    validate_snapshot(snapshot)?;
    let content = serde_yaml::to_string(snapshot)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Snapshot> {
    let content = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

pub fn save_json(path: &Path, snapshot: &Snapshot) -> ProjectResult<()> {
    validate_snapshot(snapshot)?;
    let content = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else is YAML.
pub fn load(path: &Path) -> ProjectResult<Snapshot> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
