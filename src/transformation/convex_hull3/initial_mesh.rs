use super::{ConvexHullError, TriangleFacet};
use crate::math::Real;
use crate::transformation::convex_hull2_idx;
use crate::utils;
use na::{Point2, Point3, Vector3};

/// The outcome of the first step of the hull computation.
pub enum InitialMesh {
    /// Two back-to-back facets to grow a polyhedron from.
    Facets(Vec<TriangleFacet>),
    /// The input is flat or collinear: this is already the final hull.
    ResultMesh {
        vertices: Vec<Point3<Real>>,
        indices: Vec<[u32; 3]>,
        dimension: usize,
    },
}

/// Eigenvalues below this threshold denote a direction the (normalized) input does not span.
const SUBSPACE_EIGENVALUE_EPSILON: Real = 1.0e-7;

fn build_degenerate_mesh_segment(
    dir: &Vector3<Real>,
    points: &[Point3<Real>],
) -> Result<InitialMesh, ConvexHullError> {
    let a = utils::point_cloud_support_point(dir, points).ok_or(ConvexHullError::IncompleteInput)?;
    let b =
        utils::point_cloud_support_point(&-*dir, points).ok_or(ConvexHullError::IncompleteInput)?;

    Ok(InitialMesh::ResultMesh {
        vertices: vec![a, b],
        indices: vec![],
        dimension: 1,
    })
}

fn build_degenerate_mesh_polygon(
    axis1: &Vector3<Real>,
    axis2: &Vector3<Real>,
    original_points: &[Point3<Real>],
    normalized_points: &[Point3<Real>],
) -> Result<InitialMesh, ConvexHullError> {
    // Project into the principal halfspace…
    let subspace_points: Vec<_> = normalized_points
        .iter()
        .map(|point| Point2::new(point.coords.dot(axis1), point.coords.dot(axis2)))
        .collect();

    // … and compute the 2d convex hull.
    let idx = convex_hull2_idx(&subspace_points, crate::math::DEFAULT_EPSILON * 100.0);

    if idx.len() < 3 {
        // All the points ended up being collinear after all.
        return build_degenerate_mesh_segment(axis1, original_points);
    }

    // Finalize the result, triangulating both sides of the polygon.
    let npoints = idx.len() as u32;
    let coords = idx.into_iter().map(|i| original_points[i]).collect();
    let mut triangles = Vec::with_capacity(2 * (npoints as usize - 2));

    for id in 1..npoints - 1 {
        triangles.push([0, id, id + 1]);
    }

    // NOTE: We use a different starting point for the triangulation
    // of the bottom faces in order to avoid bad topology where
    // and edge would end be being shared by more than two triangles.
    for id in 0..npoints - 2 {
        let a = npoints - 1;
        triangles.push([a, id + 1, id]);
    }

    Ok(InitialMesh::ResultMesh {
        vertices: coords,
        indices: triangles,
        dimension: 2,
    })
}

pub fn try_get_initial_mesh(
    original_points: &[Point3<Real>],
    normalized_points: &mut [Point3<Real>],
    undecidable: &mut Vec<usize>,
) -> Result<InitialMesh, ConvexHullError> {
    /*
     * Compute the eigenvectors to see if the input data live on a subspace.
     */
    let cov_mat = utils::cov(normalized_points).ok_or(ConvexHullError::IncompleteInput)?;
    let eig = cov_mat.symmetric_eigen();
    let eigvec = eig.eigenvectors;
    let eigval = eig.eigenvalues;

    let mut eigpairs = [
        (eigvec.column(0).into_owned(), eigval[0]),
        (eigvec.column(1).into_owned(), eigval[1]),
        (eigvec.column(2).into_owned(), eigval[2]),
    ];

    /*
     * Sort in decreasing order wrt. eigenvalues.
     */
    eigpairs.sort_by(|a, b| b.1.total_cmp(&a.1));

    /*
     * Count the dimension the data lives in.
     */
    let dimension = eigpairs
        .iter()
        .take_while(|pair| !relative_eq!(pair.1, 0.0, epsilon = SUBSPACE_EIGENVALUE_EPSILON))
        .count();

    match dimension {
        0 => Err(ConvexHullError::SinglePoint),
        1 => build_degenerate_mesh_segment(&eigpairs[0].0, original_points),
        2 => build_degenerate_mesh_polygon(
            &eigpairs[0].0,
            &eigpairs[1].0,
            original_points,
            normalized_points,
        ),
        3 => {
            // The hull is a polyhedron.
            // Find a initial triangle lying on the principal halfspace…
            let center = utils::center(normalized_points).ok_or(ConvexHullError::IncompleteInput)?;

            for point in normalized_points.iter_mut() {
                *point = Point3::from((*point - center) / eigval.amax());
            }

            let p1 = utils::point_cloud_support_point_id(&eigpairs[0].0, normalized_points)
                .ok_or(ConvexHullError::IncompleteInput)?;
            let p2 = utils::point_cloud_support_point_id(&-eigpairs[0].0, normalized_points)
                .ok_or(ConvexHullError::IncompleteInput)?;

            let mut max_area = 0.0;
            let mut p3 = None;

            for (i, point) in normalized_points.iter().enumerate() {
                let area = (normalized_points[p2] - normalized_points[p1])
                    .cross(&(*point - normalized_points[p1]))
                    .norm_squared();

                if area > max_area {
                    max_area = area;
                    p3 = Some(i);
                }
            }

            let p3 = p3.ok_or(ConvexHullError::InternalError(
                "no initial triangle found for a three-dimensional input",
            ))?;

            // Build two facets with opposite normals
            let mut f1 = TriangleFacet::new(p1, p2, p3, normalized_points);
            let mut f2 = TriangleFacet::new(p2, p1, p3, normalized_points);

            // Link the facets together
            f1.set_facets_adjacency([1, 1, 1], [0, 2, 1]);
            f2.set_facets_adjacency([0, 0, 0], [0, 2, 1]);

            let mut facets = vec![f1, f2];

            // … and attribute visible points to each one of them.
            for point in 0..normalized_points.len() {
                if normalized_points[point] == normalized_points[p1]
                    || normalized_points[point] == normalized_points[p2]
                    || normalized_points[point] == normalized_points[p3]
                {
                    continue;
                }

                let mut furthest = None;
                let mut furthest_dist = 0.0;

                for (i, curr_facet) in facets.iter().enumerate() {
                    if curr_facet.can_see_point(point, normalized_points) {
                        let distance = curr_facet.distance_to_point(point, normalized_points);

                        if distance > furthest_dist {
                            furthest = Some(i);
                            furthest_dist = distance;
                        }
                    }
                }

                match furthest {
                    Some(i) => facets[i].add_visible_point(point, normalized_points),
                    None => undecidable.push(point),
                }
            }

            super::check_facet_links(0, &facets)?;
            super::check_facet_links(1, &facets)?;

            Ok(InitialMesh::Facets(facets))
        }
        _ => Err(ConvexHullError::InternalError(
            "a point cloud cannot span more than three dimensions",
        )),
    }
}
