use super::{ConvexHullError, InitialMesh, TriangleFacet};
use crate::bounding_volume;
use crate::math::{Real, DEFAULT_EPSILON};
use crate::transformation::convex_hull_utils::{indexed_support_point_nth, normalize};
use crate::utils;
use na::Point3;

/// Relative distance under which a hull vertex is considered to lie on one of the
/// edges or faces around it.
const CORNER_EPSILON: Real = DEFAULT_EPSILON * 10.0;

/// Computes the convex hull of a set of 3d points.
///
/// Triangles of the returned hull face outward with the clockwise winding used by
/// the whole crate. Only the corners of the hull are kept: points lying inside
/// the hull, on one of its edges or faces, or duplicating a corner are dropped.
///
/// If the input is flat, the hull is a polygon triangulated on both sides. If
/// it is collinear, the hull is a segment made of its two extremities and no triangle.
///
/// # Errors
///
/// Fails with [`ConvexHullError::IncompleteInput`] if `points` is empty, with
/// [`ConvexHullError::SinglePoint`] if all the points are equal, and with
/// [`ConvexHullError::NonFinitePoint`] if one of its coordinates is NaN or infinite.
pub fn try_convex_hull(
    points: &[Point3<Real>],
) -> Result<(Vec<Point3<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    try_convex_hull_with_dimension(points).map(|(vertices, indices, _)| (vertices, indices))
}

/// Computes the convex hull of a set of 3d points, together with the dimension of
/// the subspace the points span.
pub(crate) fn try_convex_hull_with_dimension(
    points: &[Point3<Real>],
) -> Result<(Vec<Point3<Real>>, Vec<[u32; 3]>, usize), ConvexHullError> {
    if let Some(i) = points
        .iter()
        .position(|pt| pt.iter().any(|x| !x.is_finite()))
    {
        return Err(ConvexHullError::NonFinitePoint(i));
    }

    if points.is_empty() {
        return Err(ConvexHullError::IncompleteInput);
    }

    let (vertices, indices, dimension) = quickhull(points)?;

    if dimension < 3 {
        return Ok((vertices, indices, dimension));
    }

    // Near-ties in the furthest point selection may turn points lying on an edge
    // or a face of the hull into vertices. Build the hull again without them.
    let corners = corner_vertices(&vertices, &indices);
    let num_corners = corners.iter().filter(|is_corner| **is_corner).count();

    if num_corners == vertices.len() || num_corners < 4 {
        return Ok((vertices, indices, dimension));
    }

    log::debug!(
        "dropping {} convex hull vertices lying on an edge or a face",
        vertices.len() - num_corners
    );

    let corner_points: Vec<_> = vertices
        .iter()
        .zip(&corners)
        .filter(|(_, is_corner)| **is_corner)
        .map(|(pt, _)| *pt)
        .collect();

    quickhull(&corner_points)
}

/// Flags the vertices of a closed hull that are corners, as opposed to vertices lying
/// in the middle of an edge or of a face.
fn corner_vertices(vertices: &[Point3<Real>], indices: &[[u32; 3]]) -> Vec<bool> {
    let tolerance = bounding_volume::details::local_point_cloud_aabb(vertices)
        .map(|aabb| aabb.diagonal() * CORNER_EPSILON)
        .unwrap_or(0.0);
    let mut neighbors = vec![Vec::new(); vertices.len()];
    let mut largest_face = vec![(0.0, na::Vector3::zeros()); vertices.len()];

    for tri in indices {
        let normal = utils::cw_face_normal(
            &vertices[tri[0] as usize],
            &vertices[tri[1] as usize],
            &vertices[tri[2] as usize],
        );
        let area = normal.norm_squared();

        for k in 0..3 {
            let i = tri[k] as usize;
            // On a closed hull, each neighbor follows the vertex in exactly one triangle.
            neighbors[i].push(tri[(k + 1) % 3] as usize);

            if area > largest_face[i].0 {
                largest_face[i] = (area, normal);
            }
        }
    }

    vertices
        .iter()
        .enumerate()
        .map(|(i, vertex)| {
            let around = &neighbors[i];

            // In the middle of a face: all the neighbors share a plane with the vertex.
            if let Some(normal) = largest_face[i].1.try_normalize(DEFAULT_EPSILON) {
                if around
                    .iter()
                    .all(|j| normal.dot(&(vertices[*j] - vertex)).abs() <= tolerance)
                {
                    return false;
                }
            }

            // In the middle of an edge: the vertex lies between two of its neighbors.
            for (k, a) in around.iter().enumerate() {
                for b in &around[k + 1..] {
                    let ab = vertices[*b] - vertices[*a];
                    let av = vertex - vertices[*a];
                    let len2 = ab.norm_squared();

                    if len2 > 0.0 {
                        let t = av.dot(&ab) / len2;

                        if t > 0.0 && t < 1.0 && (av - ab * t).norm() <= tolerance {
                            return false;
                        }
                    }
                }
            }

            true
        })
        .collect()
}

fn quickhull(
    points: &[Point3<Real>],
) -> Result<(Vec<Point3<Real>>, Vec<[u32; 3]>, usize), ConvexHullError> {
    let mut normalized_points = points.to_vec();

    if normalize(&mut normalized_points[..]).is_none() {
        return Err(if points.is_empty() {
            ConvexHullError::IncompleteInput
        } else {
            ConvexHullError::SinglePoint
        });
    }

    let mut undecidable_points = Vec::new();
    let mut silhouette_loop_facets_and_idx = Vec::new();
    let mut removed_facets = Vec::new();

    let mut triangles = match super::try_get_initial_mesh(
        points,
        &mut normalized_points[..],
        &mut undecidable_points,
    )? {
        InitialMesh::Facets(facets) => facets,
        InitialMesh::ResultMesh {
            vertices,
            indices,
            dimension,
        } => {
            log::debug!(
                "convex hull of {} points is {}-dimensional: {} vertices, {} triangles",
                points.len(),
                dimension,
                vertices.len(),
                indices.len()
            );
            return Ok((vertices, indices, dimension));
        }
    };

    let mut i = 0;
    while i != triangles.len() {
        silhouette_loop_facets_and_idx.clear();

        if !triangles[i].valid
            || triangles[i].affinely_dependent
            || triangles[i].furthest_point == usize::MAX
        {
            i += 1;
            continue;
        }

        let point = triangles[i].furthest_point;
        triangles[i].valid = false;

        removed_facets.clear();
        removed_facets.push(i);

        for j in 0usize..3 {
            compute_silhouette(
                triangles[i].adj[j],
                triangles[i].indirect_adj_id[j],
                point,
                &mut silhouette_loop_facets_and_idx,
                &normalized_points[..],
                &mut removed_facets,
                &mut triangles[..],
            );
        }

        // In some degenerate cases (because of float rounding problems), the silhouette may:
        // 1. Contain self-intersections (i.e. a single vertex is used by more than two edges).
        // 2. Contain multiple disjoint (but nested) loops.
        fix_silhouette_topology(
            &normalized_points,
            &mut silhouette_loop_facets_and_idx,
            &mut removed_facets,
            &mut triangles[..],
        )?;

        if silhouette_loop_facets_and_idx.is_empty() {
            // Due to inaccuracies, the silhouette could not be computed
            // (the point seems to be visible from… every triangle).
            let any_valid = triangles[i + 1..]
                .iter()
                .any(|t| t.valid && !t.affinely_dependent);

            if any_valid {
                return Err(ConvexHullError::InternalError(
                    "the silhouette of a visible point is empty",
                ));
            }

            triangles[i].valid = true;
            break;
        }

        attach_and_push_facets(
            &silhouette_loop_facets_and_idx[..],
            point,
            &normalized_points[..],
            &mut triangles,
            &removed_facets[..],
            &mut undecidable_points,
        )?;

        i += 1;
    }

    // Facets are built counter-clockwise: swap two indices to get clockwise triangles.
    let mut idx: Vec<[u32; 3]> = triangles
        .iter()
        .filter(|facet| facet.valid)
        .map(|facet| {
            [
                facet.pts[0] as u32,
                facet.pts[2] as u32,
                facet.pts[1] as u32,
            ]
        })
        .collect();

    let mut vertices = points.to_vec();
    utils::remove_unused_points(&mut vertices, &mut idx[..]);

    if vertices.is_empty() {
        return Err(ConvexHullError::InternalError("empty output mesh"));
    }

    log::debug!(
        "convex hull of {} points: {} vertices, {} triangles",
        points.len(),
        vertices.len(),
        idx.len()
    );

    Ok((vertices, idx, 3))
}

fn compute_silhouette(
    facet: usize,
    indirect_id: usize,
    point: usize,
    out_facets_and_idx: &mut Vec<(usize, usize)>,
    points: &[Point3<Real>],
    removed_facets: &mut Vec<usize>,
    triangles: &mut [TriangleFacet],
) {
    if triangles[facet].valid {
        if !triangles[facet].order_independent_can_be_seen_by_point(point, points) {
            out_facets_and_idx.push((facet, indirect_id));
        } else {
            triangles[facet].valid = false; // The facet must be removed from the convex hull.
            removed_facets.push(facet);

            compute_silhouette(
                triangles[facet].adj[(indirect_id + 1) % 3],
                triangles[facet].indirect_adj_id[(indirect_id + 1) % 3],
                point,
                out_facets_and_idx,
                points,
                removed_facets,
                triangles,
            );

            compute_silhouette(
                triangles[facet].adj[(indirect_id + 2) % 3],
                triangles[facet].indirect_adj_id[(indirect_id + 2) % 3],
                point,
                out_facets_and_idx,
                points,
                removed_facets,
                triangles,
            );
        }
    }
}

fn fix_silhouette_topology(
    points: &[Point3<Real>],
    out_facets_and_idx: &mut Vec<(usize, usize)>,
    removed_facets: &mut Vec<usize>,
    triangles: &mut [TriangleFacet],
) -> Result<(), ConvexHullError> {
    let mut workspace = vec![0; points.len()];
    let mut needs_fixing = false;

    // NOTE: we work with the second_point_from_edge instead
    // of the first one, because when we traverse the silhouette
    // we see the second edge point before the first.
    for (facet, adj_id) in &*out_facets_and_idx {
        let p = triangles[*facet].second_point_from_edge(*adj_id);
        workspace[p] += 1;

        if workspace[p] > 1 {
            needs_fixing = true;
        }
    }

    if !needs_fixing {
        return Ok(());
    }

    // We have multiple loops: find the one we need to keep.
    let mut loop_start = 0;
    for (facet, adj_id) in &*out_facets_and_idx {
        let p1 = points[triangles[*facet].second_point_from_edge(*adj_id)];
        let p2 = points[triangles[*facet].first_point_from_edge(*adj_id)];
        let supp = indexed_support_point_nth(
            &(p2 - p1),
            points,
            out_facets_and_idx
                .iter()
                .map(|(f, ai)| triangles[*f].second_point_from_edge(*ai)),
        )
        .ok_or(ConvexHullError::InternalError("empty silhouette loop"))?;
        let selected = &out_facets_and_idx[supp];

        if workspace[triangles[selected.0].second_point_from_edge(selected.1)] == 1 {
            // This is a valid point to start with.
            loop_start = supp;
            break;
        }
    }

    let mut removing = None;
    let old_facets_and_idx = core::mem::take(out_facets_and_idx);

    for i in 0..old_facets_and_idx.len() {
        let facet_id = (loop_start + i) % old_facets_and_idx.len();
        let (facet, adj_id) = old_facets_and_idx[facet_id];
        let p1 = triangles[facet].second_point_from_edge(adj_id);

        removing = match removing {
            Some(p) if p == p1 => None,
            None if workspace[p1] > 1 => Some(p1),
            other => other,
        };

        if removing.is_some() {
            if triangles[facet].valid {
                triangles[facet].valid = false;
                removed_facets.push(facet);
            }
        } else {
            out_facets_and_idx.push((facet, adj_id));
        }
    }

    Ok(())
}

fn attach_and_push_facets(
    silhouette_loop_facets_and_idx: &[(usize, usize)],
    point: usize,
    points: &[Point3<Real>],
    triangles: &mut Vec<TriangleFacet>,
    removed_facets: &[usize],
    undecidable: &mut Vec<usize>,
) -> Result<(), ConvexHullError> {
    // The silhouette is built to be in CCW order.
    let mut new_facets: Vec<_> = silhouette_loop_facets_and_idx
        .iter()
        .map(|&(adj_facet, indirect_id)| {
            TriangleFacet::new(
                point,
                triangles[adj_facet].second_point_from_edge(indirect_id),
                triangles[adj_facet].first_point_from_edge(indirect_id),
                points,
            )
        })
        .collect();

    // Link the facets together.
    let nfacets = silhouette_loop_facets_and_idx.len();
    for i in 0..nfacets {
        let prev_facet = triangles.len() + (i + nfacets - 1) % nfacets;
        let (middle_facet, middle_id) = silhouette_loop_facets_and_idx[i];
        let next_facet = triangles.len() + (i + 1) % nfacets;

        new_facets[i].set_facets_adjacency(
            [prev_facet, middle_facet, next_facet],
            [2, middle_id, 0],
        );

        if triangles[triangles[middle_facet].adj[middle_id]].valid {
            return Err(ConvexHullError::InternalError(
                "a silhouette edge is still linked to a valid facet",
            ));
        }

        triangles[middle_facet].adj[middle_id] = triangles.len() + i; // The future id of curr_facet.
        triangles[middle_facet].indirect_adj_id[middle_id] = 1;
    }

    // Assign to each facets some of the points which can see it.
    for curr_facet in removed_facets.iter() {
        for visible_point in triangles[*curr_facet].visible_points.iter() {
            if points[*visible_point] == points[point] {
                continue;
            }

            let mut furthest = None;
            let mut furthest_dist = 0.0;

            for (i, curr_facet) in new_facets.iter().enumerate() {
                if !curr_facet.affinely_dependent {
                    let distance = curr_facet.distance_to_point(*visible_point, points);

                    if distance > furthest_dist {
                        furthest = Some(i);
                        furthest_dist = distance;
                    }
                }
            }

            if let Some(furthest) = furthest {
                if new_facets[furthest].can_see_point(*visible_point, points) {
                    new_facets[furthest].add_visible_point(*visible_point, points);
                }
            }

            // If none of the facet can be seen from the point, it is implicitly
            // deleted because it won't be referenced by any facet.
        }
    }

    // Try to assign collinear points to one of the new facets.
    let mut i = 0;

    while i != undecidable.len() {
        let mut furthest = None;
        let mut furthest_dist = 0.0;
        let undecidable_point = undecidable[i];

        for (j, curr_facet) in new_facets.iter().enumerate() {
            if curr_facet.can_see_point(undecidable_point, points) {
                let distance = curr_facet.distance_to_point(undecidable_point, points);

                if distance > furthest_dist {
                    furthest = Some(j);
                    furthest_dist = distance;
                }
            }
        }

        match furthest {
            Some(j) => {
                new_facets[j].add_visible_point(undecidable_point, points);
                let _ = undecidable.swap_remove(i);
            }
            None => i += 1,
        }
    }

    triangles.append(&mut new_facets);
    Ok(())
}
