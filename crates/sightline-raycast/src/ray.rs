//! Ray representation and hit records.

use sightline_math::{Plane, Point3, Transform, Vec3};
use sightline_scene::{Face, NodeId};

/// A half-line `origin + t * direction`, `t >= 0`.
///
/// The direction is kept as given and is not normalized, so ray parameters
/// are measured in multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray, any non-zero length.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Replace origin and direction in place.
    pub fn set(&mut self, origin: Point3, direction: Vec3) {
        self.origin = origin;
        self.direction = direction;
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Signed parameter at which the ray meets `plane`.
    ///
    /// See [`ray_plane_distance`](crate::intersect::ray_plane_distance).
    #[inline]
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f64> {
        crate::intersect::ray_plane_distance(self, plane)
    }

    /// Apply `transform` to the origin as a point and to the direction as a
    /// vector, without renormalizing.
    pub fn transform(&mut self, transform: &Transform) {
        self.origin = transform.apply_point(&self.origin);
        self.direction = transform.apply_vec(&self.direction);
    }

    /// Copy of this ray with `transform` applied.
    pub fn transformed(&self, transform: &Transform) -> Self {
        let mut ray = *self;
        ray.transform(transform);
        ray
    }

    /// Euclidean distance from `point` to the nearest point of the ray.
    ///
    /// Points behind the origin measure to the origin itself.
    pub fn distance_to_point(&self, point: &Point3) -> f64 {
        let to_point = point - self.origin;
        let along = to_point.dot(&self.direction);
        let len_sq = self.direction.norm_squared();

        if along <= 0.0 || len_sq == 0.0 {
            return to_point.norm();
        }

        (self.at(along / len_sq) - point).norm()
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Point3::origin(), -Vec3::z())
    }
}

/// One intersection of a ray with a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<'a> {
    /// World-space distance from the ray origin to `point`.
    pub distance: f64,
    /// World-space hit point. For particles this is the particle's local
    /// `position` field.
    pub point: Point3,
    /// The face that was hit; `None` for particles.
    pub face: Option<&'a Face>,
    /// Index of `face` in its geometry; `None` for particles.
    pub face_index: Option<usize>,
    /// The node that was hit.
    pub object: NodeId,
}
