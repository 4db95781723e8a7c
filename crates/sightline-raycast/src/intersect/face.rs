//! Narrow-phase ray test against a single triangle or quad face.

use log::trace;
use sightline_math::{Plane, Point3};
use sightline_scene::{Face, FaceKind, Side};

use super::point_in_triangle;
use crate::{RaycastError, Ray, Result};

/// Per-mesh inputs shared by every face test.
#[derive(Debug, Clone, Copy)]
pub struct FaceQuery<'r> {
    /// The caller's ray, in world space.
    pub world_ray: &'r Ray,
    /// The same ray expressed in the mesh's local space.
    pub local_ray: &'r Ray,
    /// Minimum world-space hit distance.
    pub near: f64,
    /// Maximum world-space hit distance.
    pub far: f64,
    /// Plane distances below this magnitude count as parallel.
    pub precision: f64,
}

/// A face intersection before it is attached to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    /// World-space distance from the ray origin.
    pub distance: f64,
    /// World-space hit point.
    pub point: Point3,
}

/// Whether a face seen with `plane_sign = direction · normal` is visible
/// under `side`.
fn side_admits(side: Side, plane_sign: f64) -> bool {
    match side {
        Side::Double => true,
        Side::Front => plane_sign < 0.0,
        Side::Back => plane_sign > 0.0,
    }
}

fn vertex(vertices: &[Point3], face: usize, index: usize) -> Result<&Point3> {
    vertices.get(index).ok_or(RaycastError::VertexIndexOutOfRange {
        face,
        index,
        len: vertices.len(),
    })
}

/// Intersect the query ray with one face of a mesh.
///
/// The plane test runs in local space against the face's precomputed
/// normal and centroid. A hit is reported with its world-space point and
/// distance, and only if that distance lies within `[near, far]`. Quads
/// are split along the `b`-`d` diagonal into `abd` and `bcd`.
///
/// Returns `Ok(None)` for every kind of miss, including rays parallel to
/// the face and faces culled by `side`. Fails only if the face indexes a
/// vertex that does not exist.
pub fn intersect_face(
    query: &FaceQuery<'_>,
    face_index: usize,
    face: &Face,
    vertices: &[Point3],
    side: Side,
) -> Result<Option<FaceHit>> {
    let plane = Plane::from_normal_and_coplanar_point(face.normal, &face.centroid);
    let local_ray = query.local_ray;

    let Some(t) = local_ray.distance_to_plane(&plane) else {
        return Ok(None);
    };

    if t.abs() < query.precision || t < 0.0 {
        return Ok(None);
    }

    let plane_sign = local_ray.direction.dot(&plane.normal);
    if !side_admits(side, plane_sign) {
        trace!("face {face_index} culled ({side:?}, sign {plane_sign})");
        return Ok(None);
    }

    let p = local_ray.at(t);

    let inside = match face.kind {
        FaceKind::Triangle { a, b, c } => point_in_triangle(
            &p,
            vertex(vertices, face_index, a)?,
            vertex(vertices, face_index, b)?,
            vertex(vertices, face_index, c)?,
        ),
        FaceKind::Quad { a, b, c, d } => {
            let a = vertex(vertices, face_index, a)?;
            let b = vertex(vertices, face_index, b)?;
            let c = vertex(vertices, face_index, c)?;
            let d = vertex(vertices, face_index, d)?;
            point_in_triangle(&p, a, b, d) || point_in_triangle(&p, b, c, d)
        }
    };

    if !inside {
        return Ok(None);
    }

    // `t` is shared by both rays; only the world ray gives true distances
    // under non-uniform scale.
    let point = query.world_ray.at(t);
    let distance = (point - query.world_ray.origin).norm();

    if distance < query.near || distance > query.far {
        return Ok(None);
    }

    Ok(Some(FaceHit { distance, point }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sightline_math::{Transform, Vec3};
    use sightline_scene::Geometry;

    fn unit_triangle() -> Geometry {
        Geometry::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![Face::triangle(0, 1, 2)],
        )
        .unwrap()
    }

    fn cast(ray: &Ray, geometry: &Geometry, side: Side) -> Option<FaceHit> {
        let query = FaceQuery {
            world_ray: ray,
            local_ray: ray,
            near: 0.0,
            far: f64::INFINITY,
            precision: 1e-4,
        };
        intersect_face(&query, 0, &geometry.faces[0], &geometry.vertices, side).unwrap()
    }

    #[test]
    fn test_hits_inside_unit_triangle() {
        let ray = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = cast(&ray, &unit_triangle(), Side::Front).unwrap();
        assert_relative_eq!(hit.distance, 1.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point, Point3::new(0.25, 0.25, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_misses_outside_unit_triangle() {
        let ray = Ray::new(Point3::new(0.9, 0.9, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(cast(&ray, &unit_triangle(), Side::Double).is_none());
    }

    #[test]
    fn test_side_culling() {
        // Approaching from below: direction and normal agree.
        let ray = Ray::new(Point3::new(0.25, 0.25, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let geometry = unit_triangle();
        assert!(cast(&ray, &geometry, Side::Front).is_none());
        assert!(cast(&ray, &geometry, Side::Back).is_some());
        assert!(cast(&ray, &geometry, Side::Double).is_some());

        let from_above = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(cast(&from_above, &geometry, Side::Back).is_none());
    }

    #[test]
    fn test_parallel_and_behind_are_skipped() {
        let geometry = unit_triangle();
        let parallel = Ray::new(Point3::new(-1.0, 0.25, 0.5), Vec3::x());
        assert!(cast(&parallel, &geometry, Side::Double).is_none());

        let behind = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::z());
        assert!(cast(&behind, &geometry, Side::Double).is_none());
    }

    #[test]
    fn test_plane_closer_than_precision_is_skipped() {
        let ray = Ray::new(Point3::new(0.25, 0.25, 5e-5), Vec3::new(0.0, 0.0, -1.0));
        assert!(cast(&ray, &unit_triangle(), Side::Double).is_none());
    }

    #[test]
    fn test_quad_split_along_bd() {
        let square = Geometry::plane(2.0, 2.0);
        let down = Vec3::new(0.0, 0.0, -1.0);

        // Center lies on the b-d diagonal; covered by `bcd`.
        let center = Ray::new(Point3::new(0.0, 0.0, 1.0), down);
        assert!(cast(&center, &square, Side::Front).is_some());

        // Interior points on either side of the diagonal.
        assert!(cast(&Ray::new(Point3::new(-0.5, -0.5, 1.0), down), &square, Side::Front).is_some());
        assert!(cast(&Ray::new(Point3::new(0.5, 0.5, 1.0), down), &square, Side::Front).is_some());

        // Corner `c` is excluded from `bcd` and not part of `abd`.
        let corner = Ray::new(Point3::new(1.0, 1.0, 1.0), down);
        assert!(cast(&corner, &square, Side::Front).is_none());

        // Corner `a` is the inclusive corner of `abd`.
        let corner_a = Ray::new(Point3::new(-1.0, -1.0, 1.0), down);
        assert!(cast(&corner_a, &square, Side::Front).is_some());
    }

    #[test]
    fn test_world_distance_under_non_uniform_scale() {
        // Mesh stretched 3x along Z: local hit at t=1 is 3 world units away.
        let world = Transform::scale(&Vec3::new(1.0, 1.0, 3.0));
        let world_ray = Ray::new(Point3::new(0.25, 0.25, 3.0), Vec3::new(0.0, 0.0, -3.0));
        let local_ray = world_ray.transformed(&world.inverse().unwrap());
        let geometry = unit_triangle();
        let query = FaceQuery {
            world_ray: &world_ray,
            local_ray: &local_ray,
            near: 0.0,
            far: f64::INFINITY,
            precision: 1e-4,
        };
        let hit = intersect_face(&query, 0, &geometry.faces[0], &geometry.vertices, Side::Front)
            .unwrap()
            .unwrap();
        assert_relative_eq!(hit.distance, 3.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point, Point3::new(0.25, 0.25, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_near_far_window() {
        let ray = Ray::new(Point3::new(0.25, 0.25, 2.0), Vec3::new(0.0, 0.0, -1.0));
        let geometry = unit_triangle();
        let window = |near, far| FaceQuery {
            world_ray: &ray,
            local_ray: &ray,
            near,
            far,
            precision: 1e-4,
        };
        let test = |q: FaceQuery<'_>| {
            intersect_face(&q, 0, &geometry.faces[0], &geometry.vertices, Side::Front).unwrap()
        };
        assert!(test(window(0.0, 1.5)).is_none());
        assert!(test(window(2.5, 10.0)).is_none());
        assert!(test(window(2.0, 2.0)).is_some());
    }

    #[test]
    fn test_bad_vertex_index_is_reported() {
        let ray = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let face = Face::triangle(0, 1, 5).with_plane(Vec3::z(), Point3::origin());
        let vertices = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let query = FaceQuery {
            world_ray: &ray,
            local_ray: &ray,
            near: 0.0,
            far: f64::INFINITY,
            precision: 1e-4,
        };
        assert_eq!(
            intersect_face(&query, 3, &face, &vertices, Side::Front),
            Err(RaycastError::VertexIndexOutOfRange {
                face: 3,
                index: 5,
                len: 2
            })
        );
    }
}
