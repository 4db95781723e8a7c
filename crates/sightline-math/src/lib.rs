#![warn(missing_docs)]

//! Math types for sightline.
//!
//! Thin wrappers around nalgebra providing the handful of types the scene
//! graph and the raycaster share: points, vectors, rotations, affine
//! transforms, and the two bounding shapes used during intersection tests.

use nalgebra::{Matrix4, UnitQuaternion, Vector3};

mod volume;

pub use volume::{Plane, Sphere};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A rotation in 3D space.
pub type Rotation = UnitQuaternion<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Pure translation by `offset`.
    pub fn translation(offset: &Vec3) -> Self {
        Self {
            matrix: Matrix4::new_translation(offset),
        }
    }

    /// Per-axis scale, without rotation or translation.
    pub fn scale(factors: &Vec3) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(factors),
        }
    }

    /// Pure rotation.
    pub fn rotation(rotation: &Rotation) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Compose a transform from a position, a rotation and a per-axis scale.
    ///
    /// Scale is applied first, then rotation, then translation.
    pub fn from_parts(position: &Vec3, rotation: &Rotation, scale: &Vec3) -> Self {
        Self::translation(position)
            .then(&Self::rotation(rotation))
            .then(&Self::scale(scale))
    }

    /// Matrix product `self * other`: the result applies `other` first,
    /// then `self`. A child's world transform is `parent.then(&local)`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        self.matrix.transform_point(p)
    }

    /// Transform a direction vector (ignores translation, applies rotation/scale).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        self.matrix.transform_vector(v)
    }

    /// Inverse of this transform, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// The translation part of this transform.
    pub fn position(&self) -> Point3 {
        Point3::new(
            self.matrix[(0, 3)],
            self.matrix[(1, 3)],
            self.matrix[(2, 3)],
        )
    }

    /// Length of the longest basis vector of the upper-left 3x3 block.
    ///
    /// Scaling a local-space radius by this factor bounds the radius in
    /// world space under any rotation and non-uniform scale.
    pub fn max_scale_on_axis(&self) -> f64 {
        let sx = self.matrix.fixed_view::<3, 1>(0, 0).norm_squared();
        let sy = self.matrix.fixed_view::<3, 1>(0, 1).norm_squared();
        let sz = self.matrix.fixed_view::<3, 1>(0, 2).norm_squared();
        sx.max(sy).max(sz).sqrt()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
