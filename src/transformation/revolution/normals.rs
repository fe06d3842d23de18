use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;

/// Computes the normal of each vertex of a triangle mesh.
///
/// Each vertex normal is the normalized sum of the face normals of the triangles
/// it belongs to, weighted by their area. Triangles are expected to follow the
/// clockwise winding of [`utils::cw_face_normal`].
///
/// Returns the normals together with the sorted indices of the vertices whose
/// normal is undefined: vertices referenced by no triangle, or only by triangles
/// with a zero area, or whose face normals cancel out. The normal of those
/// vertices is set to zero.
pub fn compute_vertex_normals(
    points: &[Point<Real>],
    indices: &[[u32; 3]],
) -> (Vec<Vector<Real>>, Vec<u32>) {
    let mut normals = vec![Vector::zeros(); points.len()];

    for idx in indices {
        let normal = utils::cw_face_normal(
            &points[idx[0] as usize],
            &points[idx[1] as usize],
            &points[idx[2] as usize],
        );

        for i in idx {
            normals[*i as usize] += normal;
        }
    }

    let mut degenerate = Vec::new();

    for (i, normal) in normals.iter_mut().enumerate() {
        if normal.try_normalize_mut(DEFAULT_EPSILON).is_none() {
            *normal = Vector::zeros();
            degenerate.push(i as u32);
        }
    }

    if !degenerate.is_empty() {
        log::warn!(
            "{} vertices have an undefined normal, the first one being vertex {}",
            degenerate.len(),
            degenerate[0]
        );
    }

    (normals, degenerate)
}
