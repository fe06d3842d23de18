use super::{ConvexHullError, TriangleFacet};
use crate::bounding_volume;
use crate::math::{Real, DEFAULT_EPSILON};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{self, SortedPair};
use na::Point3;

/// Relative distance a hull vertex may lie in front of a triangle plane.
const CONVEXITY_EPSILON: Real = DEFAULT_EPSILON * 100.0;

const INCONSISTENT_LINKS: ConvexHullError =
    ConvexHullError::InternalError("inconsistent facet adjacency");

pub fn check_facet_links(ifacet: usize, facets: &[TriangleFacet]) -> Result<(), ConvexHullError> {
    let facet = &facets[ifacet];

    for i in 0..3 {
        let adj_facet = &facets[facet.adj[i]];
        let adj_id = facet.indirect_adj_id[i];

        if !adj_facet.valid
            || adj_facet.adj[adj_id] != ifacet
            || adj_facet.indirect_adj_id[adj_id] != i
            || adj_facet.first_point_from_edge(adj_id) != facet.second_point_from_edge(i)
            || adj_facet.second_point_from_edge(adj_id) != facet.first_point_from_edge(i)
        {
            return Err(INCONSISTENT_LINKS);
        }
    }

    Ok(())
}

/// Checks if a convex-hull is properly formed.
///
/// The hull must be a closed two-manifold triangle mesh without duplicate
/// vertices: every edge is shared by exactly two triangles and the Euler
/// characteristic `V - E + F` is `2`. It must also be convex: no vertex lies in
/// front of the plane of a triangle wound clockwise, up to a tolerance relative to
/// the size of the hull.
///
/// Hulls of collinear inputs have no triangle and always pass this check.
pub fn check_convex_hull(
    points: &[Point3<Real>],
    triangles: &[[u32; 3]],
) -> Result<(), ConvexHullError> {
    struct EdgeData {
        adjacent_triangles: [usize; 2],
    }

    if triangles.is_empty() {
        return Ok(());
    }

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            if points[i] == points[j] {
                return Err(ConvexHullError::DuplicatePoints(i, j));
            }
        }
    }

    let mut edges = HashMap::new();

    for (itri, tri) in triangles.iter().enumerate() {
        if tri[0] == tri[1] || tri[0] == tri[2] || tri[2] == tri[1] {
            return Err(ConvexHullError::DegenerateTriangle(itri));
        }

        for i in 0..3 {
            let ivtx1 = tri[i];
            let ivtx2 = tri[(i + 1) % 3];
            let edge_key = SortedPair::new(ivtx1, ivtx2);

            match edges.entry(edge_key) {
                Entry::Vacant(e) => {
                    let _ = e.insert(EdgeData {
                        adjacent_triangles: [itri, usize::MAX],
                    });
                }
                Entry::Occupied(mut e) => {
                    if e.get().adjacent_triangles[1] != usize::MAX {
                        return Err(ConvexHullError::TJunction(itri, ivtx1, ivtx2));
                    }

                    e.get_mut().adjacent_triangles[1] = itri;
                }
            }
        }
    }

    if edges
        .values()
        .any(|edge| edge.adjacent_triangles[1] == usize::MAX)
    {
        return Err(ConvexHullError::UnfinishedTriangle);
    }

    let euler = points.len() as isize + triangles.len() as isize - edges.len() as isize;

    if euler != 2 {
        return Err(ConvexHullError::InvalidEulerCharacteristic(euler));
    }

    let tolerance = bounding_volume::details::local_point_cloud_aabb(points)
        .map(|aabb| aabb.diagonal() * CONVEXITY_EPSILON)
        .unwrap_or(0.0);

    for (itri, tri) in triangles.iter().enumerate() {
        let a = &points[tri[0] as usize];
        let b = &points[tri[1] as usize];
        let c = &points[tri[2] as usize];

        if let Some(normal) = utils::cw_unit_face_normal(a, b, c) {
            if let Some(i) = points
                .iter()
                .position(|pt| normal.dot(&(pt - a)) > tolerance)
            {
                return Err(ConvexHullError::NotConvex(itri, i));
            }
        }
    }

    Ok(())
}
