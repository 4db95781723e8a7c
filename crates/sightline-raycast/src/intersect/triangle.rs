//! Barycentric point-in-triangle test.

use sightline_math::Point3;

/// Test whether `p`, assumed coplanar with the triangle, lies inside `abc`.
///
/// Uses barycentric coordinates `u` (along `c - a`) and `v` (along
/// `b - a`). The sum bound is strict, so points on edge `bc` and on the
/// corners `b` and `c` are outside. Two triangles sharing that edge never
/// both report a point on it.
pub fn point_in_triangle(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> bool {
    let e0 = c - a;
    let e1 = b - a;
    let e2 = p - a;

    let d00 = e0.dot(&e0);
    let d01 = e0.dot(&e1);
    let d02 = e0.dot(&e2);
    let d11 = e1.dot(&e1);
    let d12 = e1.dot(&e2);

    let inv_denom = 1.0 / (d00 * d11 - d01 * d01);
    let u = (d11 * d02 - d01 * d12) * inv_denom;
    let v = (d00 * d12 - d01 * d02) * inv_denom;

    u >= 0.0 && v >= 0.0 && u + v < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> (Point3, Point3, Point3) {
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_interior_point() {
        let (a, b, c) = unit();
        assert!(point_in_triangle(&Point3::new(0.25, 0.25, 0.0), &a, &b, &c));
    }

    #[test]
    fn test_outside_past_hypotenuse() {
        let (a, b, c) = unit();
        assert!(!point_in_triangle(&Point3::new(0.9, 0.9, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&Point3::new(-0.1, 0.5, 0.0), &a, &b, &c));
    }

    #[test]
    fn test_boundary_bias() {
        let (a, b, c) = unit();
        // Edges through `a` are inclusive.
        assert!(point_in_triangle(&a, &a, &b, &c));
        assert!(point_in_triangle(&Point3::new(0.5, 0.0, 0.0), &a, &b, &c));
        assert!(point_in_triangle(&Point3::new(0.0, 0.5, 0.0), &a, &b, &c));
        // Edge `bc` and its corners are exclusive.
        assert!(!point_in_triangle(&Point3::new(0.5, 0.5, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&b, &a, &b, &c));
        assert!(!point_in_triangle(&c, &a, &b, &c));
    }

    #[test]
    fn test_degenerate_triangle_contains_nothing() {
        let a = Point3::origin();
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        assert!(!point_in_triangle(&Point3::new(0.5, 0.0, 0.0), &a, &b, &c));
    }
}
