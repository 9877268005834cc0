//! Snapshot -> graph conversion.

use std::collections::HashMap;

use pipe_core::{FittingId, SegmentId};
use pipe_graph::{FittingKind, PipeGraph, PipeGraphBuilder};

use crate::ProjectResult;
use crate::schema::{FittingDef, FittingKindDef, Snapshot};

impl From<FittingKindDef> for FittingKind {
    fn from(def: FittingKindDef) -> Self {
        match def {
            FittingKindDef::Tee => FittingKind::Tee,
            FittingKindDef::Elbow => FittingKind::Elbow,
            FittingKindDef::Coupling => FittingKind::Coupling,
            FittingKindDef::Cap => FittingKind::Cap,
            FittingKindDef::Generic => FittingKind::Generic,
        }
    }
}

/// Explicit kind if given, otherwise classified from the catalog names.
pub fn resolve_kind(def: &FittingDef) -> FittingKind {
    match def.kind {
        Some(kind) => kind.into(),
        None => FittingKind::classify(
            def.family.as_deref().unwrap_or_default(),
            def.type_name.as_deref().unwrap_or_default(),
        ),
    }
}

/// Build a graph from a snapshot.
///
/// Connections are made symmetric: a link listed on either side appears on
/// both. References to ids that are not in the snapshot, and links from an
/// element to itself, are skipped with a warning.
pub fn to_graph(snapshot: &Snapshot) -> ProjectResult<PipeGraph> {
    let mut builder = PipeGraphBuilder::new();

    let segment_ids: HashMap<&str, SegmentId> = snapshot
        .segments
        .iter()
        .map(|s| {
            let id = builder.add_segment(s.id.clone(), s.length_ft, s.diameter_in);
            (s.id.as_str(), id)
        })
        .collect();

    let fitting_ids: HashMap<&str, FittingId> = snapshot
        .fittings
        .iter()
        .map(|f| {
            let id = builder.add_fitting(f.id.clone(), resolve_kind(f));
            builder.set_connection_count(id, f.connection_count);
            (f.id.as_str(), id)
        })
        .collect();

    let lookup = |table: &HashMap<&str, pipe_core::Id>, key: &str, owner: &str| {
        let found = table.get(key).copied();
        if found.is_none() {
            tracing::warn!(owner, reference = key, "skipping unresolved reference");
        }
        found
    };

    for s in &snapshot.segments {
        let id = segment_ids[s.id.as_str()];
        for key in &s.connected_fittings {
            if let Some(f) = lookup(&fitting_ids, key, &s.id) {
                builder.connect_segment_fitting(id, f);
            }
        }
        for key in &s.connected_pipes {
            match lookup(&segment_ids, key, &s.id) {
                Some(other) if other == id => {
                    tracing::warn!(segment = %s.id, "skipping segment linked to itself");
                }
                Some(other) => builder.connect_segments(id, other),
                None => {}
            }
        }
    }

    for f in &snapshot.fittings {
        let id = fitting_ids[f.id.as_str()];
        for key in &f.connected_pipes {
            if let Some(s) = lookup(&segment_ids, key, &f.id) {
                builder.connect_segment_fitting(s, id);
            }
        }
        for key in &f.connected_fittings {
            match lookup(&fitting_ids, key, &f.id) {
                Some(other) if other == id => {
                    tracing::warn!(fitting = %f.id, "skipping fitting linked to itself");
                }
                Some(other) => builder.connect_fittings(id, other),
                None => {}
            }
        }
    }

    let graph = builder.build()?;
    tracing::debug!(
        snapshot = %snapshot.name,
        segments = graph.segments().len(),
        fittings = graph.fittings().len(),
        "converted snapshot"
    );
    Ok(graph)
}
