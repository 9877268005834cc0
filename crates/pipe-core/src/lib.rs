//! pipe-core: stable foundation for the pipe schematic workspace.
//!
//! Contains:
//! - ids (stable compact IDs for segments and fittings)
//! - numeric (Real, diameter matching, dimension checks)
//! - units (uom length types + constructors)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PipeError, PipeResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
