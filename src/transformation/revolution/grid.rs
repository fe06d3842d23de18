use crate::math::{Point, Real, TexCoord, Vector};
use crate::transformation::utils;
use na::RealField;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The vertices of a surface of revolution, before any triangle is built.
///
/// The vertex of ring `i` and segment `j` is stored at index `i * segments + j`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// The vertex positions.
    pub points: Vec<Point<Real>>,
    /// The texture coordinates of each vertex.
    pub uvs: Vec<TexCoord<Real>>,
}

/// Computes the vertices of the surface of revolution with the given ring radii.
///
/// Ring `i` lies at height `y = 1 - 2i / (rings - 1)`, and the `segments` vertices of
/// a ring are evenly spaced around the `y` axis. The vertex of segment `j` has the
/// texture coordinates `(u, v) = (1 - j / segments, i / (rings - 1))` and lies at the
/// angle `2πu`. All positions are then multiplied component-wise by `axis_scale`.
///
/// There is no duplicate vertex on the texture seam: the last segment of each ring
/// is linked back to its first one by the triangles.
pub fn build_grid(radii: &[Real], axis_scale: &Vector<Real>, segments: u32) -> Grid {
    let nsegments = segments as usize;
    let nvertices = radii.len() * nsegments;

    if nvertices == 0 {
        return Grid {
            points: Vec::new(),
            uvs: Vec::new(),
        };
    }

    let mut points = vec![Point::origin(); nvertices];
    let mut uvs = vec![TexCoord::origin(); nvertices];
    let inv_rings = 1.0 / (radii.len().max(2) - 1) as Real;
    let inv_segments = 1.0 / segments as Real;

    let build_ring =
        |(i, (ring_points, ring_uvs)): (usize, (&mut [Point<Real>], &mut [TexCoord<Real>]))| {
            let v = i as Real * inv_rings;
            let y = 1.0 - 2.0 * v;
            let radius = radii[i];

            for (j, (pt, uv)) in ring_points.iter_mut().zip(ring_uvs.iter_mut()).enumerate() {
                let u = 1.0 - j as Real * inv_segments;
                let (sin, cos) = (Real::two_pi() * u).sin_cos();
                *pt = Point::new(radius * cos, y, radius * sin);
                *uv = TexCoord::new(u, v);
            }
        };

    // Each ring writes to its own chunk of the buffers.
    #[cfg(feature = "parallel")]
    points
        .par_chunks_mut(nsegments)
        .zip(uvs.par_chunks_mut(nsegments))
        .enumerate()
        .for_each(build_ring);

    #[cfg(not(feature = "parallel"))]
    points
        .chunks_mut(nsegments)
        .zip(uvs.chunks_mut(nsegments))
        .enumerate()
        .for_each(build_ring);

    log::debug!(
        "built a grid of {} rings and {} segments",
        radii.len(),
        segments
    );

    Grid {
        points: utils::scaled(points, *axis_scale),
        uvs,
    }
}
