use super::{build_grid, compute_vertex_normals, sample_profile, stitch, GenerationError};
use crate::math::{Real, Vector};
use crate::profile::Profile;
use crate::shape::{ConvexHull, RevolutionMesh};

/// The number of rings used by [`GenerationParameters::new`].
pub const DEFAULT_RINGS: u32 = 9;
/// The number of segments used by [`GenerationParameters::new`].
pub const DEFAULT_SEGMENTS: u32 = 9;

/// Describes the solid of revolution built by [`generate`].
///
/// The solid spans the height range `[-1, 1]` and the radii given by `profile`,
/// before being scaled component-wise by `axis_scale`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GenerationParameters<P> {
    /// The radius of the solid along its axis.
    pub profile: P,
    /// The scale applied to the solid along each axis.
    pub axis_scale: Vector<Real>,
    /// The number of vertex rings along the axis, both ends included.
    pub rings: u32,
    /// The number of vertices of each ring.
    pub segments: u32,
}

impl<P> GenerationParameters<P> {
    /// Parameters for an unscaled solid with [`DEFAULT_RINGS`] rings and [`DEFAULT_SEGMENTS`] segments.
    pub fn new(profile: P) -> Self {
        Self {
            profile,
            axis_scale: Vector::repeat(1.0),
            rings: DEFAULT_RINGS,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the scale applied to the solid along each axis.
    #[must_use]
    pub fn with_axis_scale(mut self, axis_scale: Vector<Real>) -> Self {
        self.axis_scale = axis_scale;
        self
    }

    /// Sets the number of vertex rings along the axis.
    #[must_use]
    pub fn with_rings(mut self, rings: u32) -> Self {
        self.rings = rings;
        self
    }

    /// Sets the number of vertices of each ring.
    #[must_use]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Checks that these parameters describe a closed surface addressable with 32-bit indices.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let (rings, segments) = (self.rings, self.segments);

        if rings < 3 || segments < 3 {
            return Err(GenerationError::DegenerateParameters { rings, segments });
        }

        if rings.checked_mul(segments).is_none() {
            return Err(GenerationError::TooManyVertices { rings, segments });
        }

        Ok(())
    }
}

/// Generates a solid of revolution and the convex hull of its vertices.
///
/// The profile is sampled at `rings` evenly spaced heights, from the top of the solid
/// (`t = 0`, at `y = axis_scale.y`) to its bottom (`t = 1`, at `y = -axis_scale.y`).
/// Each ring is closed by a triangle fan if its radius is greater than
/// [`CAP_EPSILON`](super::CAP_EPSILON).
///
/// # Errors
///
/// Nothing is generated if the parameters are invalid (see
/// [`GenerationParameters::validate`]), if the profile fails on any ring, or if
/// every vertex ends up at the same location so that the solid has no convex hull.
pub fn generate<P: Profile>(
    params: &GenerationParameters<P>,
) -> Result<(RevolutionMesh, ConvexHull), GenerationError> {
    params.validate()?;

    let table = sample_profile(&params.profile, params.rings)?;
    let grid = build_grid(table.radii(), &params.axis_scale, params.segments);
    let (indices, caps) = stitch(table.radii(), params.segments);
    let (normals, degenerate_normals) = compute_vertex_normals(&grid.points, &indices);
    let hull = ConvexHull::try_from_points(&grid.points)?;

    if hull.dimension() < 3 {
        log::warn!(
            "the convex hull of the solid of revolution is {}-dimensional",
            hull.dimension()
        );
    }

    log::debug!(
        "generated a solid of revolution with {} vertices and {} triangles, hull: {} vertices",
        grid.points.len(),
        indices.len(),
        hull.points().len()
    );

    let mesh = RevolutionMesh::new(
        grid.points,
        grid.uvs,
        normals,
        indices,
        params.rings,
        params.segments,
        caps,
        degenerate_normals,
    );

    Ok((mesh, hull))
}
