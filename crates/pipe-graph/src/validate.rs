//! Graph validation logic.

use pipe_core::ensure_positive;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Fitting, Segment};

/// Validate that every adjacency entry resolves and is mirrored on the other side.
pub(crate) fn validate_symmetry(segments: &[Segment], fittings: &[Fitting]) -> GraphResult<()> {
    let segment = |id: pipe_core::SegmentId| {
        segments
            .get(id.slot())
            .ok_or(GraphError::UnknownSegment { segment: id })
    };
    let fitting = |id: pipe_core::FittingId| {
        fittings
            .get(id.slot())
            .ok_or(GraphError::UnknownFitting { fitting: id })
    };

    for s in segments {
        if s.connected_pipes.contains(&s.id) {
            return Err(GraphError::SelfLink {
                what: "Segment",
                id: s.id,
            });
        }
        for &f_id in &s.connected_fittings {
            if !fitting(f_id)?.connected_pipes.contains(&s.id) {
                return Err(asymmetric("segment", s.id, "fitting", f_id));
            }
        }
        for &other in &s.connected_pipes {
            if !segment(other)?.connected_pipes.contains(&s.id) {
                return Err(asymmetric("segment", s.id, "segment", other));
            }
        }
    }

    for f in fittings {
        if f.connected_fittings.contains(&f.id) {
            return Err(GraphError::SelfLink {
                what: "Fitting",
                id: f.id,
            });
        }
        for &s_id in &f.connected_pipes {
            if !segment(s_id)?.connected_fittings.contains(&f.id) {
                return Err(asymmetric("fitting", f.id, "segment", s_id));
            }
        }
        for &other in &f.connected_fittings {
            if !fitting(other)?.connected_fittings.contains(&f.id) {
                return Err(asymmetric("fitting", f.id, "fitting", other));
            }
        }
    }

    Ok(())
}

/// Strict numeric check: lengths and diameters must be finite and positive.
pub(crate) fn validate_dimensions(segments: &[Segment]) -> GraphResult<()> {
    for s in segments {
        for (what, value) in [("length", s.length), ("diameter", s.diameter)] {
            if ensure_positive(value, what).is_err() {
                return Err(GraphError::InvalidDimension {
                    segment: s.id,
                    what,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn asymmetric(
    from_what: &str,
    from: pipe_core::Id,
    to_what: &str,
    to: pipe_core::Id,
) -> GraphError {
    GraphError::AsymmetricLink {
        from: format!("{from_what} {from}"),
        to: format!("{to_what} {to}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FittingKind;
    use pipe_core::Id;
    use std::collections::BTreeSet;

    fn seg(index: u32, fittings: &[u32]) -> Segment {
        Segment {
            id: Id::from_index(index),
            name: format!("S{index}"),
            length: 2.0,
            diameter: 1.0,
            connected_fittings: fittings.iter().map(|&f| Id::from_index(f)).collect(),
            connected_pipes: BTreeSet::new(),
        }
    }

    fn fit(index: u32, pipes: &[u32]) -> Fitting {
        Fitting {
            id: Id::from_index(index),
            name: format!("F{index}"),
            kind: FittingKind::Coupling,
            connected_pipes: pipes.iter().map(|&p| Id::from_index(p)).collect(),
            connected_fittings: BTreeSet::new(),
            connection_count: 2,
        }
    }

    #[test]
    fn validate_empty_graph() {
        assert!(validate_symmetry(&[], &[]).is_ok());
        assert!(validate_dimensions(&[]).is_ok());
    }

    #[test]
    fn validate_symmetric_pair() {
        let segments = vec![seg(0, &[0]), seg(1, &[0])];
        let fittings = vec![fit(0, &[0, 1])];
        assert!(validate_symmetry(&segments, &fittings).is_ok());
    }

    #[test]
    fn validate_one_sided_link() {
        let segments = vec![seg(0, &[0]), seg(1, &[])];
        let fittings = vec![fit(0, &[0, 1])];
        let err = validate_symmetry(&segments, &fittings).unwrap_err();
        assert!(matches!(err, GraphError::AsymmetricLink { .. }));
        assert!(err.to_string().contains("fitting 0 lists segment 1"));
    }

    #[test]
    fn validate_dangling_reference() {
        let segments = vec![seg(0, &[4])];
        let err = validate_symmetry(&segments, &[]).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownFitting {
                fitting: Id::from_index(4)
            }
        );
    }

    #[test]
    fn validate_dimensions_rejects_nan_and_zero() {
        let mut bad = seg(0, &[]);
        bad.diameter = f64::NAN;
        assert!(matches!(
            validate_dimensions(&[bad]),
            Err(GraphError::InvalidDimension {
                what: "diameter",
                ..
            })
        ));

        let mut zero = seg(0, &[]);
        zero.length = 0.0;
        assert!(validate_dimensions(&[zero]).is_err());
    }
}
