//! pipe-schematic: turns a pipe connectivity graph into an indented text tree.
//!
//! Pipeline:
//! - [`root::select_root`] picks the starting segment
//! - [`tree::render_tree`] walks the graph, merging straight runs through
//!   [`accumulate::accumulate`] / [`chain::walk_chain`] and branching at tees
//! - [`orphans`] lists whatever the traversal never reached
//! - [`report::build_report`] assembles the full document with inventories
//!   and the summary line

pub mod accumulate;
pub mod chain;
pub mod diameter;
pub mod drawn;
pub mod error;
pub mod length;
pub mod orphans;
pub mod report;
pub mod root;
pub mod tree;

pub use accumulate::{Run, accumulate};
pub use chain::{ChainStep, walk_chain};
pub use diameter::format_diameter;
pub use drawn::DrawnSet;
pub use error::{SchematicError, SchematicResult};
pub use length::LengthSummary;
pub use report::{SchematicReport, SystemSummary, build_report};
pub use root::select_root;
pub use tree::{TreeLine, render_tree};
