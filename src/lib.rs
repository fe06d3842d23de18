/*!
lathe3d
========

**lathe3d** generates closed 3-dimensional solids of revolution from a
1-dimensional radius profile, together with a convex collision hull of the
resulting mesh. It is written with the rust programming language.

```
# #[cfg(feature = "f32")] {
use lathe3d::math::{Real, Vector};
use lathe3d::transformation::revolution::{generate, GenerationParameters};

let params = GenerationParameters::new(|t: Real| (t * core::f32::consts::PI).sin())
    .with_axis_scale(Vector::new(1.0, 2.0, 1.0))
    .with_rings(16)
    .with_segments(24);
let (mesh, hull) = generate(&params).unwrap();

assert_eq!(mesh.points().len(), 16 * 24);
assert!(hull.points().len() <= mesh.points().len());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)] // Complains about closures that are fairly simple.
#![allow(clippy::too_many_arguments)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod profile;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point2, Point3, UnitVector3, Vector2, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The texture coordinate type.
    pub use Point2 as TexCoord;
}
