//! Generation and transformation of meshes.
//!
//! The [`revolution`] pipeline turns a radius profile into a closed solid of
//! revolution. The convex hull of any point cloud can be computed with
//! [`try_convex_hull`] and validated with [`check_convex_hull`].

pub(crate) use self::convex_hull2::convex_hull2_idx;
pub(crate) use self::convex_hull3::try_convex_hull_with_dimension;
pub use self::convex_hull3::{check_convex_hull, try_convex_hull, ConvexHullError};
pub use self::revolution::{generate, GenerationError, GenerationParameters};

mod convex_hull2;
mod convex_hull3;
pub(crate) mod convex_hull_utils;

pub mod revolution;
pub mod utils;
