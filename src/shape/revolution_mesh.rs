use crate::bounding_volume::{self, Aabb};
use crate::math::{Point, Real, TexCoord, Vector};
use crate::transformation::revolution::CapFlags;
use core::ops::Range;

/// A closed triangle mesh generated by revolving a radius profile around the `y` axis.
///
/// The vertices are organized as `rings` rings of `segments` vertices each, ring `0`
/// being the top of the solid. Vertex buffers are stored as parallel arrays: the
/// position, texture coordinates and normal of a vertex share the same index.
///
/// Triangles are wound clockwise when seen from outside of the solid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RevolutionMesh {
    points: Vec<Point<Real>>,
    uvs: Vec<TexCoord<Real>>,
    normals: Vec<Vector<Real>>,
    indices: Vec<[u32; 3]>,
    rings: u32,
    segments: u32,
    caps: CapFlags,
    degenerate_normals: Vec<u32>,
    aabb: Aabb,
}

impl RevolutionMesh {
    pub(crate) fn new(
        points: Vec<Point<Real>>,
        uvs: Vec<TexCoord<Real>>,
        normals: Vec<Vector<Real>>,
        indices: Vec<[u32; 3]>,
        rings: u32,
        segments: u32,
        caps: CapFlags,
        degenerate_normals: Vec<u32>,
    ) -> Self {
        let aabb = bounding_volume::details::local_point_cloud_aabb(&points)
            .unwrap_or_else(|| Aabb::new(Point::origin(), Point::origin()));

        Self {
            points,
            uvs,
            normals,
            indices,
            rings,
            segments,
            caps,
            degenerate_normals,
            aabb,
        }
    }

    /// The vertex positions of this mesh.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The texture coordinates of each vertex.
    #[inline]
    pub fn uvs(&self) -> &[TexCoord<Real>] {
        &self.uvs
    }

    /// The unit normal of each vertex.
    ///
    /// Vertices listed by [`Self::degenerate_normals`] have a zero normal instead.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// A flat view of the index buffer of this mesh.
    #[inline]
    pub fn flat_indices(&self) -> &[u32] {
        self.indices.as_flattened()
    }

    /// The number of vertex rings of this mesh.
    #[inline]
    pub fn rings(&self) -> u32 {
        self.rings
    }

    /// The number of vertices of each ring.
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// The end rings closed by a triangle fan.
    #[inline]
    pub fn caps(&self) -> CapFlags {
        self.caps
    }

    /// The number of end rings closed by a triangle fan.
    #[inline]
    pub fn num_caps(&self) -> usize {
        self.caps.bits().count_ones() as usize
    }

    /// The sorted indices of the vertices with an undefined normal.
    ///
    /// A normal is undefined when every triangle sharing the vertex has a zero area.
    pub fn degenerate_normals(&self) -> &[u32] {
        &self.degenerate_normals
    }

    /// The range of vertex indices of the given ring, or `None` if it does not exist.
    pub fn ring(&self, i: u32) -> Option<Range<usize>> {
        if i >= self.rings {
            return None;
        }

        let start = i as usize * self.segments as usize;
        Some(start..start + self.segments as usize)
    }

    /// The index of the vertex at the given ring and segment.
    ///
    /// The segment wraps around the seam: `vertex_id(i, segments) == vertex_id(i, 0)`.
    #[inline]
    pub fn vertex_id(&self, ring: u32, segment: u32) -> u32 {
        ring * self.segments + segment % self.segments
    }

    /// The axis-aligned bounding box of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Copies the positions and triangles of this mesh.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.points.clone(), self.indices.clone())
    }
}
