//! Ray-plane distance (closed-form).

use sightline_math::Plane;

use crate::Ray;

/// Signed ray parameter at which `ray` meets `plane`.
///
/// Positive when the plane lies ahead of the origin, negative when behind.
/// The result is in units of the ray direction's length. Returns `None`
/// when the ray is parallel to the plane and off it, and `Some(0.0)` when
/// the ray lies in the plane.
pub fn ray_plane_distance(ray: &Ray, plane: &Plane) -> Option<f64> {
    let denom = plane.normal.dot(&ray.direction);

    if denom == 0.0 {
        return if plane.distance_to_point(&ray.origin) == 0.0 {
            Some(0.0)
        } else {
            None
        };
    }

    Some(-(ray.origin.coords.dot(&plane.normal) + plane.constant) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sightline_math::{Point3, Vec3};

    fn xy() -> Plane {
        Plane::from_normal_and_coplanar_point(Vec3::z(), &Point3::origin())
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(ray_plane_distance(&ray, &xy()).unwrap(), 5.0);
    }

    #[test]
    fn test_ray_plane_behind_is_negative() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(ray_plane_distance(&ray, &xy()).unwrap(), -5.0);
    }

    #[test]
    fn test_ray_plane_scaled_direction() {
        // Parameter is measured in direction lengths, not world units.
        let ray = Ray::new(Point3::new(3.0, 4.0, 10.0), Vec3::new(0.0, 0.0, -4.0));
        assert_relative_eq!(ray_plane_distance(&ray, &xy()).unwrap(), 2.5);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let off = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::x());
        assert!(ray_plane_distance(&off, &xy()).is_none());

        let inside = Ray::new(Point3::new(1.0, 1.0, 0.0), Vec3::x());
        assert_eq!(ray_plane_distance(&inside, &xy()), Some(0.0));
    }

    #[test]
    fn test_ray_plane_offset_plane() {
        let plane = Plane::from_normal_and_coplanar_point(Vec3::y(), &Point3::new(7.0, 2.0, -1.0));
        let ray = Ray::new(Point3::new(0.0, 10.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let t = ray_plane_distance(&ray, &plane).unwrap();
        assert_relative_eq!(t, 8.0);
        assert_relative_eq!(ray.at(t).y, 2.0);
    }
}
