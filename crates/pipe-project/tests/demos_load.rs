use std::path::Path;

use pipe_graph::FittingKind;

fn demo(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos/snapshots")
        .join(name)
}

#[test]
fn demos_load_and_convert() {
    let demos = [
        ("01_tee_branch.yaml", 3, 1),
        ("02_elbow_run.yaml", 3, 2),
        ("03_mixed_system.yaml", 6, 4),
    ];

    for (name, segments, fittings) in demos {
        let snapshot = pipe_project::load(&demo(name))
            .unwrap_or_else(|e| panic!("Failed to load {name}: {e}"));
        let graph = pipe_project::to_graph(&snapshot)
            .unwrap_or_else(|e| panic!("Failed to convert {name}: {e}"));

        assert_eq!(graph.segments().len(), segments, "{name}");
        assert_eq!(graph.fittings().len(), fittings, "{name}");
        graph
            .validate()
            .unwrap_or_else(|e| panic!("{name} is not symmetric: {e}"));
    }
}

#[test]
fn mixed_demo_classifies_fittings_from_family_names() {
    let snapshot = pipe_project::load(&demo("03_mixed_system.yaml")).unwrap();
    let graph = pipe_project::to_graph(&snapshot).unwrap();

    let kinds: Vec<_> = graph.fittings().iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        [
            FittingKind::Elbow,
            FittingKind::Generic,
            FittingKind::Tee,
            FittingKind::Cap,
        ]
    );
    assert_eq!(graph.tee_count(), 1);
    assert_eq!(graph.elbow_count(), 1);

    let loose = graph.segments().iter().find(|s| s.name == "1206").unwrap();
    assert!(loose.connected_fittings.is_empty());
}
