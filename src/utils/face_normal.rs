use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// The area-weighted normal of a triangle wound clockwise when seen from its front side.
///
/// The returned vector is `(c - a) × (b - a)`: its norm is twice the triangle area.
#[inline]
pub fn cw_face_normal(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Vector<Real> {
    (c - a).cross(&(b - a))
}

/// The unit normal of a triangle wound clockwise when seen from its front side.
///
/// Returns `None` if the triangle is degenerate.
#[inline]
pub fn cw_unit_face_normal(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<UnitVector<Real>> {
    UnitVector::try_new(cw_face_normal(a, b, c), DEFAULT_EPSILON)
}
