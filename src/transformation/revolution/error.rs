use crate::profile::ProfileError;
use crate::transformation::ConvexHullError;

/// Errors that can occur while generating a solid of revolution.
///
/// No mesh is produced when generation fails.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GenerationError {
    /// The profile failed, or returned a non-finite radius.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
    /// Less than 3 rings or less than 3 segments were requested.
    #[error("At least 3 rings and 3 segments are required, got {rings} rings and {segments} segments.")]
    DegenerateParameters {
        /// The requested number of rings.
        rings: u32,
        /// The requested number of segments.
        segments: u32,
    },
    /// The vertices cannot be addressed with 32-bit indices.
    #[error("{rings} rings of {segments} segments exceed the range of 32-bit vertex indices.")]
    TooManyVertices {
        /// The requested number of rings.
        rings: u32,
        /// The requested number of segments.
        segments: u32,
    },
    /// The convex hull of the vertices could not be computed.
    #[error("Convex hull error: {0}")]
    ConvexHull(#[from] ConvexHullError),
}
