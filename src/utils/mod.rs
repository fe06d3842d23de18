//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::cleanup::remove_unused_points;
pub use self::cov::{center_cov, cov};
pub use self::face_normal::{cw_face_normal, cw_unit_face_normal};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sorted_pair::SortedPair;

mod center;
mod cleanup;
mod cov;
mod face_normal;
pub mod hashmap;
mod point_cloud_support_point;
mod sorted_pair;
