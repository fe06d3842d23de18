use crate::bounding_volume::{self, Aabb};
use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::transformation::{try_convex_hull_with_dimension, ConvexHullError};
use crate::utils;

/// Relative tolerance of [`ConvexHull::contains_point`], scaled by the hull diagonal.
const CONTAINMENT_EPSILON: Real = DEFAULT_EPSILON * 100.0;

/// The convex hull of a set of points.
///
/// A hull spanning the three dimensions is a closed convex polyhedron whose triangles are
/// wound clockwise when seen from outside. Flat point sets give a polygon
/// triangulated on both sides, and collinear point sets a segment without any triangle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    dimension: usize,
    aabb: Aabb,
}

impl ConvexHull {
    /// Computes the convex hull of the given points.
    ///
    /// Fails if `points` is empty, if all its points are equal, or if it contains
    /// non-finite coordinates.
    pub fn try_from_points(points: &[Point<Real>]) -> Result<Self, ConvexHullError> {
        let (points, indices, dimension) = try_convex_hull_with_dimension(points)?;
        let aabb = bounding_volume::details::local_point_cloud_aabb(&points)
            .ok_or(ConvexHullError::InternalError("empty output mesh"))?;

        Ok(Self {
            points,
            indices,
            dimension,
            aabb,
        })
    }

    /// The vertices of this hull.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The index buffer of this hull.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// A flat view of the index buffer of this hull.
    #[inline]
    pub fn flat_indices(&self) -> &[u32] {
        self.indices.as_flattened()
    }

    /// The dimension of the space spanned by the hull vertices, between `1` and `3`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The axis-aligned bounding box of this hull.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Tests if the given point is inside of this hull or on its boundary.
    ///
    /// Always `false` for hulls with less than three dimensions.
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        if self.dimension < 3 {
            return false;
        }

        let tolerance = self.aabb.diagonal() * CONTAINMENT_EPSILON;

        self.indices.iter().all(|idx| {
            let a = &self.points[idx[0] as usize];
            let b = &self.points[idx[1] as usize];
            let c = &self.points[idx[2] as usize];

            match utils::cw_unit_face_normal(a, b, c) {
                Some(normal) => normal.dot(&(point - a)) <= tolerance,
                None => true,
            }
        })
    }

    /// The volume enclosed by this hull.
    ///
    /// Hulls with less than three dimensions have a zero volume.
    pub fn volume(&self) -> Real {
        if self.dimension < 3 {
            return 0.0;
        }

        let six_volume: Real = self
            .indices
            .iter()
            .map(|idx| {
                let a = self.points[idx[0] as usize].coords;
                let b = self.points[idx[1] as usize].coords;
                let c = self.points[idx[2] as usize].coords;
                a.dot(&c.cross(&b))
            })
            .sum();

        six_volume / 6.0
    }
}
