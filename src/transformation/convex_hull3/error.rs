/// Errors that can occur during convex hull computation.
///
/// Coplanar or collinear inputs are not errors: they produce a lower-dimensional
/// hull. These errors denote inputs with no usable hull, or an internal
/// inconsistency detected while building or validating a hull.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexHullError {
    /// An internal error occurred during convex hull computation.
    #[error("Internal error: {0}")]
    InternalError(&'static str),
    /// Some input points have NaN or infinite coordinates.
    #[error("Input point {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),
    /// No point was given to the convex-hull algorithm.
    #[error("No point was given to the convex-hull algorithm.")]
    IncompleteInput,
    /// All the input points are at the same location.
    #[error("All the points given to the convex-hull algorithm are at the same location.")]
    SinglePoint,
    /// An edge of the hull is adjacent to only one triangle.
    #[error("Detected unfinished triangle")]
    UnfinishedTriangle,
    /// An edge of the hull is adjacent to more than two triangles.
    ///
    /// Reports the index of the triangle where the t-junction was detected,
    /// and the two vertex indices of the problematic edge.
    #[error("Detected t-junction for triangle {0}, edge: ({1}, {2})")]
    TJunction(usize, u32, u32),
    /// A triangle references the same vertex twice.
    #[error("Triangle {0} is degenerate.")]
    DegenerateTriangle(usize),
    /// Two vertices of the hull are at the same location.
    #[error("Detected duplicate points {0} and {1}")]
    DuplicatePoints(usize, usize),
    /// The hull is not homeomorphic to a sphere.
    #[error("The hull has an Euler characteristic of {0} instead of 2.")]
    InvalidEulerCharacteristic(isize),
    /// A vertex of the hull lies in front of the plane of one of its triangles.
    ///
    /// Reports the index of the triangle and the index of the vertex.
    #[error("Vertex {1} is in front of triangle {0}")]
    NotConvex(usize, usize),
}
