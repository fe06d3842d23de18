//! Low-level utilities for index-buffer generation.
//!
//! Triangles produced by this module face the side from which their three
//! vertices appear clockwise. The face normal of `[a, b, c]` is therefore
//! `(c - a) × (b - a)` (see [`cw_face_normal`](crate::utils::cw_face_normal)).
//!
//! # Building a tube between two circles
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use lathe3d::transformation::utils::{push_filled_circle_indices, push_quad_indices};
//!
//! let nsubdiv = 4;
//! let mut indices = Vec::new();
//!
//! // Upper circle: vertices 0..4, lower circle: vertices 4..8.
//! for i in 0..nsubdiv {
//!     let next = (i + 1) % nsubdiv;
//!     push_quad_indices(i, next, nsubdiv + i, nsubdiv + next, &mut indices);
//! }
//!
//! // Close the lower circle.
//! push_filled_circle_indices(nsubdiv, nsubdiv, &mut indices);
//!
//! assert_eq!(indices.len(), 2 * 4 + 2);
//! # }
//! ```

use crate::math::{Point, Real, Vector};

/// Returns the scaled version of a vector of points.
///
/// Each coordinate of each point is multiplied by the matching component of `scale`.
pub fn scaled(mut points: Vec<Point<Real>>, scale: Vector<Real>) -> Vec<Point<Real>> {
    points
        .iter_mut()
        .for_each(|p| p.coords.component_mul_assign(&scale));
    points
}

/// Pushes the two triangles of a quad to the index buffer.
///
/// With the quad laid out as:
///
/// ```text
///  ul --- ur
///   |   / |
///   |  /  |
///   | /   |
///  dl --- dr
/// ```
///
/// this pushes the upper triangle `[ul, ur, dl]` then the lower triangle `[ur, dr, dl]`.
#[inline]
pub fn push_quad_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; 3]>) {
    out.push([ul, ur, dl]);
    out.push([ur, dr, dl]);
}

/// Pushes indices so that a circle is filled with triangles. Each triangle will have the
/// `base_circle` point in common.
///
/// Pushes `nsubdiv - 2` elements to `out`, namely `[base, base + k + 1, base + k + 2]`
/// for `k` in `0..nsubdiv - 2`.
#[inline]
pub fn push_filled_circle_indices(base_circle: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    for i in base_circle + 1..base_circle + nsubdiv - 1 {
        out.push([base_circle, i, i + 1]);
    }
}

/// Reverses the winding order of triangle faces.
///
/// The first and last index of each triangle are swapped, so `[a, b, c]` becomes `[c, b, a]`.
#[inline]
pub fn reverse_clockwising(indices: &mut [[u32; 3]]) {
    indices.iter_mut().for_each(|idx| idx.swap(0, 2));
}
