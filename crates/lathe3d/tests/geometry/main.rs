#[cfg(feature = "f32")]
extern crate lathe3d as lathe;
#[cfg(feature = "f64")]
extern crate lathe3d_f64 as lathe;

#[macro_use]
extern crate approx;

mod cylinder_hull;
mod end_caps;
mod generation_errors;
mod random_hulls;
mod revolution_mesh;
