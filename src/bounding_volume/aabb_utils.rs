use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the AABB of a set of points.
///
/// Returns `None` if the iterator does not yield any point.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();
    let p0 = it.next()?;
    let mut aabb = Aabb::new(*p0, *p0);

    for pt in it {
        aabb.take_point(*pt);
    }

    Some(aabb)
}
