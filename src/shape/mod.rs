//! Shapes produced by the generators of this crate.

pub use self::convex_hull::ConvexHull;
pub use self::revolution_mesh::RevolutionMesh;

mod convex_hull;
mod revolution_mesh;
