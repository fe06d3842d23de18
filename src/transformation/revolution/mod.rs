//! Generation of solids of revolution.
//!
//! A solid is built by a single forward pipeline:
//!
//! 1. [`sample_profile`] evaluates the radius profile on each ring.
//! 2. [`build_grid`] computes the position and texture coordinates of each vertex.
//! 3. [`stitch`] links consecutive rings with triangles and closes the end rings.
//! 4. [`compute_vertex_normals`] derives the vertex normals, and the convex hull of
//!    the vertices is computed.
//!
//! [`generate`] runs all of them at once.

pub use self::error::GenerationError;
pub use self::generate::{generate, GenerationParameters, DEFAULT_RINGS, DEFAULT_SEGMENTS};
pub use self::grid::{build_grid, Grid};
pub use self::normals::compute_vertex_normals;
pub use self::sampler::{sample_profile, RadiusTable};
pub use self::stitcher::{
    push_ring_transition, quad_corners, ring_base, stitch, wrap, CapFlags, CAP_EPSILON,
};

mod error;
mod generate;
mod grid;
mod normals;
mod sampler;
mod stitcher;
