//! Bounding sphere and infinite plane.

use crate::{Point3, Vec3};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Point3::origin(), 0.0)
    }
}

/// An infinite plane in Hessian normal form: `normal · p + constant = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal. Unit length when built from a unit normal.
    pub normal: Vec3,
    /// Negated projection of any point of the plane onto `normal`.
    pub constant: f64,
}

impl Plane {
    /// Build the plane through `point` with the given `normal`.
    pub fn from_normal_and_coplanar_point(normal: Vec3, point: &Point3) -> Self {
        Self {
            normal,
            constant: -point.coords.dot(&normal),
        }
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    pub fn distance_to_point(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.constant
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vec3::z(),
            constant: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_coplanar_point() {
        let plane = Plane::from_normal_and_coplanar_point(Vec3::z(), &Point3::new(4.0, -2.0, 3.0));
        assert!((plane.constant + 3.0).abs() < 1e-12);
        assert!(plane.distance_to_point(&Point3::new(0.0, 0.0, 3.0)).abs() < 1e-12);
        assert!((plane.distance_to_point(&Point3::new(1.0, 1.0, 5.0)) - 2.0).abs() < 1e-12);
        assert!((plane.distance_to_point(&Point3::origin()) + 3.0).abs() < 1e-12);
    }
}
