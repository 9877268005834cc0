//! Nominal diameter display as inch fractions.

use pipe_core::Real;

/// Fractional parts closer than this to zero print as a whole inch.
const WHOLE_TOL: Real = 0.05;

/// Match window around each eighth; 0.33 must stay decimal rather than snap to 3/8.
const EIGHTH_TOL: Real = 0.04;

const EIGHTHS: [(Real, &str); 7] = [
    (0.125, "1/8"),
    (0.25, "1/4"),
    (0.375, "3/8"),
    (0.5, "1/2"),
    (0.625, "5/8"),
    (0.75, "3/4"),
    (0.875, "7/8"),
];

/// Format a diameter in inches, e.g. `1.5` -> `1-1/2"`, `0.33` -> `0.33"`.
///
/// Never fails; NaN and infinities fall through to the decimal form.
pub fn format_diameter(diameter: Real) -> String {
    let whole = diameter.trunc();
    let fractional = diameter - whole;

    if fractional.abs() < WHOLE_TOL {
        return format!("{}\"", whole as i64);
    }

    match EIGHTHS
        .iter()
        .find(|(eighth, _)| (fractional - eighth).abs() < EIGHTH_TOL)
    {
        Some((_, label)) if whole > 0.0 => format!("{}-{}\"", whole as i64, label),
        Some((_, label)) => format!("{label}\""),
        None => format!("{diameter:.2}\""),
    }
}

/// `2" ø  |  10.0 ft`
pub(crate) fn size_label(diameter: Real, length: Real) -> String {
    format!("{} ø  |  {:.1} ft", format_diameter(diameter), length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_sizes() {
        assert_eq!(format_diameter(0.5), "1/2\"");
        assert_eq!(format_diameter(1.0), "1\"");
        assert_eq!(format_diameter(1.5), "1-1/2\"");
        assert_eq!(format_diameter(2.125), "2-1/8\"");
        assert_eq!(format_diameter(0.75), "3/4\"");
        assert_eq!(format_diameter(0.375), "3/8\"");
        assert_eq!(format_diameter(3.875), "3-7/8\"");
    }

    #[test]
    fn near_values_snap() {
        assert_eq!(format_diameter(2.02), "2\"");
        assert_eq!(format_diameter(1.03), "1\"");
        assert_eq!(format_diameter(1.26), "1-1/4\"");
        assert_eq!(format_diameter(0.52), "1/2\"");
    }

    #[test]
    fn off_grid_values_print_decimal() {
        assert_eq!(format_diameter(0.33), "0.33\"");
        assert_eq!(format_diameter(1.19), "1.19\"");
    }

    #[test]
    fn size_label_rounds_length() {
        assert_eq!(size_label(2.0, 10.04), "2\" ø  |  10.0 ft");
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        assert_eq!(format_diameter(0.0), "0\"");
        assert_eq!(format_diameter(Real::NAN), "NaN\"");
        assert_eq!(format_diameter(-1.0), "-1\"");
        assert!(format_diameter(Real::INFINITY).ends_with('"'));
    }
}
