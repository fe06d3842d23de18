use crate::math::Real;
use na::Point2;

/// Computes the convex hull of a set of 2d points.
///
/// Returns the indices of the points on the hull, in counter-clockwise order.
/// Points lying on a hull edge (up to `eps`) are not part of the output.
pub fn convex_hull2_idx(points: &[Point2<Real>], eps: Real) -> Vec<usize> {
    let mut sorted: Vec<usize> = (0..points.len()).collect();
    sorted.sort_by(|a, b| {
        let (pa, pb) = (points[*a], points[*b]);
        pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y))
    });
    sorted.dedup_by(|a, b| points[*a] == points[*b]);

    if sorted.len() < 3 {
        return sorted;
    }

    let turns_left = |o: usize, a: usize, b: usize| {
        let oa = points[a] - points[o];
        let ob = points[b] - points[o];
        oa.perp(&ob) > eps
    };

    let mut hull: Vec<usize> = Vec::with_capacity(sorted.len() * 2);

    // Lower chain.
    for &i in &sorted {
        while hull.len() >= 2 && !turns_left(hull[hull.len() - 2], hull[hull.len() - 1], i) {
            let _ = hull.pop();
        }
        hull.push(i);
    }

    // Upper chain.
    let lower_len = hull.len() + 1;
    for &i in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && !turns_left(hull[hull.len() - 2], hull[hull.len() - 1], i)
        {
            let _ = hull.pop();
        }
        hull.push(i);
    }

    // The first point was pushed again to close the upper chain.
    let _ = hull.pop();
    hull
}
