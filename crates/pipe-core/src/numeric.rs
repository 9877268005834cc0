use crate::{PipeError, PipeResult};

/// Floating point type for lengths and diameters.
pub type Real = f64;

/// Two runs are merged only when their diameters differ by less than this (inches).
pub const DIAMETER_MATCH_TOL_IN: Real = 0.1;

/// Whether two pipe diameters count as the same nominal size.
///
/// NaN never matches anything, itself included.
pub fn same_diameter(a: Real, b: Real) -> bool {
    (a - b).abs() < DIAMETER_MATCH_TOL_IN
}

pub fn ensure_finite(v: Real, what: &'static str) -> PipeResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PipeError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> PipeResult<Real> {
    match ensure_finite(v, what)? {
        v if v > 0.0 => Ok(v),
        v => Err(PipeError::NonPositive { what, value: v }),
    }
}
