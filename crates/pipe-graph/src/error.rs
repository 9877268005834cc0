//! Graph-specific error types.

use pipe_core::{FittingId, Id, SegmentId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A link refers to a segment that doesn't exist.
    #[error("Reference to non-existent segment {segment}")]
    UnknownSegment { segment: SegmentId },

    /// A link refers to a fitting that doesn't exist.
    #[error("Reference to non-existent fitting {fitting}")]
    UnknownFitting { fitting: FittingId },

    /// A segment or fitting was linked to itself.
    #[error("{what} {id} is linked to itself")]
    SelfLink { what: &'static str, id: Id },

    /// A table entry's id doesn't match its position.
    #[error("{what} at position {position} carries id {id}")]
    IdMismatch {
        what: &'static str,
        position: usize,
        id: Id,
    },

    /// One side of a connection lists the other, but not vice versa.
    #[error("{from} lists {to} but {to} does not list {from}")]
    AsymmetricLink { from: String, to: String },

    /// Strict validation rejected a length or diameter.
    #[error("Segment {segment} has invalid {what}: {value}")]
    InvalidDimension {
        segment: SegmentId,
        what: &'static str,
        value: f64,
    },
}
