//! pipe-graph: connectivity model for pipe segments and fittings.
//!
//! Provides:
//! - Core graph data structures (Segment, Fitting, FittingKind, PipeGraph)
//! - Incremental graph builder with validation
//! - Fitting classification from catalog family/type names
//!
//! # Example
//!
//! ```
//! use pipe_graph::{FittingKind, PipeGraphBuilder};
//!
//! let mut builder = PipeGraphBuilder::new();
//! let a = builder.add_segment("A", 4.0, 2.0);
//! let b = builder.add_segment("B", 3.0, 2.0);
//! let elbow = builder.add_fitting("E", FittingKind::Elbow);
//! builder.connect_segment_fitting(a, elbow);
//! builder.connect_segment_fitting(b, elbow);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.segments().len(), 2);
//! assert!(graph.fitting(elbow).unwrap().is_non_branching());
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod validate;

// Re-exports for ergonomics
pub use builder::PipeGraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Fitting, FittingKind, PipeGraph, Segment};
