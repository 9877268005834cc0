//! Length quantities. Snapshot values arrive in feet and inches; summaries
//! also report metres.

use uom::si::f64::Length as UomLength;

/// Canonical length quantity (SI, f64).
pub type Length = UomLength;

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn in_ft(l: Length) -> f64 {
    use uom::si::length::foot;
    l.get::<foot>()
}

#[inline]
pub fn in_inches(l: Length) -> f64 {
    use uom::si::length::inch;
    l.get::<inch>()
}

#[inline]
pub fn in_m(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}
