//! Ray-sphere overlap test used for the broad phase.

use sightline_math::Sphere;

use crate::Ray;

/// Whether `ray` passes within `sphere.radius` of `sphere.center`.
///
/// Measured against the half-line, so a sphere entirely behind the origin
/// is missed while one containing the origin is always hit.
#[inline]
pub fn ray_intersects_sphere(ray: &Ray, sphere: &Sphere) -> bool {
    ray.distance_to_point(&sphere.center) <= sphere.radius
}
