//! Root selection and the size ordering shared by branch and orphan listings.

use std::cmp::Ordering;

use pipe_graph::{PipeGraph, Segment};

use crate::error::{SchematicError, SchematicResult};

/// Pick the segment the tree starts from.
///
/// Largest diameter first, then fewest fitting connections (likely a line
/// end), then longest. Ties keep table order.
pub fn select_root(graph: &PipeGraph) -> SchematicResult<&Segment> {
    let root = graph
        .segments()
        .iter()
        .min_by(|a, b| root_order(a, b))
        .ok_or(SchematicError::EmptyGraph)?;

    tracing::debug!(
        root = %root.id,
        name = %root.name,
        diameter = root.diameter,
        "selected root segment"
    );
    Ok(root)
}

fn root_order(a: &Segment, b: &Segment) -> Ordering {
    b.diameter
        .total_cmp(&a.diameter)
        .then_with(|| a.connected_fittings.len().cmp(&b.connected_fittings.len()))
        .then_with(|| b.length.total_cmp(&a.length))
}

/// Descending diameter, then descending length.
pub(crate) fn size_order(a: &Segment, b: &Segment) -> Ordering {
    b.diameter
        .total_cmp(&a.diameter)
        .then_with(|| b.length.total_cmp(&a.length))
}
