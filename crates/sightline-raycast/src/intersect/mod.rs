//! Geometric predicates and the per-face intersector.
//!
//! The predicates are pure functions over [`Ray`](crate::Ray) and the
//! bounding shapes from `sightline-math`. [`intersect_face`] combines them
//! into the narrow-phase test run for every face of a mesh that survives
//! the bounding-sphere check.

mod face;
mod plane;
mod sphere;
mod triangle;

pub use face::{intersect_face, FaceHit, FaceQuery};
pub use plane::ray_plane_distance;
pub use sphere::ray_intersects_sphere;
pub use triangle::point_in_triangle;
