use crate::math::{Point, Real};
use na;

/// Computes the centroid of a set of points, all points being weighted equally.
///
/// Returns `None` if `pts` is empty.
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    let (first, rest) = pts.split_first()?;
    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));
    let mut res = *first * denom;

    for pt in rest {
        res += pt.coords * denom;
    }

    Some(res)
}
