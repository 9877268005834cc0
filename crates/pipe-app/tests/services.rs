//! Service behaviour on snapshots built in memory.

use pipe_app::{AppError, RenderOptions, length_summary, project_service, render_diagram};
use pipe_graph::GraphError;
use pipe_project::schema::{SegmentDef, Snapshot};
use pipe_schematic::SchematicError;

fn segment(id: &str, length_ft: f64, diameter_in: f64) -> SegmentDef {
    SegmentDef {
        id: id.to_string(),
        length_ft,
        diameter_in,
        connected_fittings: vec![],
        connected_pipes: vec![],
    }
}

#[test]
fn empty_snapshot_has_nothing_to_render() {
    let snapshot = Snapshot::new("empty");
    let graph = project_service::validate_snapshot(&snapshot).unwrap();

    let err = render_diagram(&graph, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::Schematic(SchematicError::EmptyGraph)));

    let err = length_summary(&graph, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::Schematic(SchematicError::EmptyGraph)));
}

#[test]
fn strict_rejects_bad_dimensions_lenient_renders_them() {
    let mut snapshot = Snapshot::new("odd");
    snapshot.segments = vec![segment("a", 4.0, 1.0), segment("b", -2.0, 1.0)];
    let graph = project_service::validate_snapshot(&snapshot).unwrap();

    let report = render_diagram(&graph, &RenderOptions::default()).unwrap();
    assert_eq!(report.drawn_count + report.orphans.len(), 2);

    let err = render_diagram(&graph, &RenderOptions { strict: true }).unwrap_err();
    assert!(matches!(
        err,
        AppError::Graph(GraphError::InvalidDimension { what: "length", .. })
    ));
}

#[test]
fn duplicate_ids_fail_validation() {
    let mut snapshot = Snapshot::new("dup");
    snapshot.segments = vec![segment("a", 1.0, 1.0), segment("a", 2.0, 1.0)];

    let err = project_service::validate_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, AppError::Project(_)));
    assert!(err.to_string().contains("Duplicate ID: a"));
}
