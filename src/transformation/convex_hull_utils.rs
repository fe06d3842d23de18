use crate::bounding_volume;
use crate::math::{Point, Real, Vector};
use crate::num::Bounded;

/// Returns the number `n` such that `points[idx.nth(n)]` is the support point.
pub fn indexed_support_point_nth<I>(
    direction: &Vector<Real>,
    points: &[Point<Real>],
    idx: I,
) -> Option<usize>
where
    I: Iterator<Item = usize>,
{
    let mut argmax = None;
    let _max: Real = Bounded::max_value();
    let mut max = -_max;

    for (k, i) in idx.enumerate() {
        let dot = direction.dot(&points[i].coords);

        if dot > max {
            argmax = Some(k);
            max = dot;
        }
    }

    argmax
}

/// Scale and center the given set of point depending on their AABB.
///
/// Returns `None` if `coords` is empty or if all its points are equal.
pub fn normalize(coords: &mut [Point<Real>]) -> Option<(Point<Real>, Real)> {
    let aabb = bounding_volume::details::local_point_cloud_aabb(&*coords)?;
    let diag = aabb.diagonal();

    if diag == 0.0 {
        return None;
    }

    let center = aabb.center();

    for c in coords.iter_mut() {
        *c = (*c + (-center.coords)) / diag;
    }

    Some((center, diag))
}
