//! Shared service layer for pipe schematic front ends.
//!
//! Loads snapshot files, turns them into graphs and runs the schematic
//! renderer and length summary over them.

pub mod diagram_service;
pub mod error;
pub mod length_service;
pub mod project_service;

pub use diagram_service::{RenderOptions, render_diagram, render_snapshot};
pub use error::{AppError, AppResult};
pub use length_service::{length_summary, measure_snapshot};
pub use project_service::{SnapshotSummary, load_graph, load_snapshot, summarize, validate_snapshot};
