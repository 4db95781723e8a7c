//! Indexed polygon geometry with per-face normals and centroids.

use sightline_math::{Point3, Vec3};

use crate::{Result, SceneError};

/// Vertex indices of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    /// Three-vertex face.
    Triangle {
        /// First vertex index.
        a: usize,
        /// Second vertex index.
        b: usize,
        /// Third vertex index.
        c: usize,
    },
    /// Four-vertex planar face.
    Quad {
        /// First vertex index.
        a: usize,
        /// Second vertex index.
        b: usize,
        /// Third vertex index.
        c: usize,
        /// Fourth vertex index.
        d: usize,
    },
}

/// A polygon of a [`Geometry`].
///
/// `normal` and `centroid` live in the geometry's local space and are
/// filled in by [`Geometry::compute_face_normals`] and
/// [`Geometry::compute_centroids`], or supplied directly by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Triangle or quad vertex indices.
    pub kind: FaceKind,
    /// Unit face normal.
    pub normal: Vec3,
    /// Average of the face's vertices.
    pub centroid: Point3,
    /// Entry of a multi-material table used by this face.
    pub material_index: Option<usize>,
}

impl Face {
    /// A triangle over vertices `a`, `b`, `c`.
    pub fn triangle(a: usize, b: usize, c: usize) -> Self {
        Self::from_kind(FaceKind::Triangle { a, b, c })
    }

    /// A quad over vertices `a`, `b`, `c`, `d`.
    pub fn quad(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self::from_kind(FaceKind::Quad { a, b, c, d })
    }

    fn from_kind(kind: FaceKind) -> Self {
        Self {
            kind,
            normal: Vec3::zeros(),
            centroid: Point3::origin(),
            material_index: None,
        }
    }

    /// Set the multi-material index.
    pub fn with_material(mut self, index: usize) -> Self {
        self.material_index = Some(index);
        self
    }

    /// Set the face normal and centroid explicitly.
    pub fn with_plane(mut self, normal: Vec3, centroid: Point3) -> Self {
        self.normal = normal;
        self.centroid = centroid;
        self
    }

    /// Vertex indices in winding order.
    pub fn vertex_indices(&self) -> Vec<usize> {
        match self.kind {
            FaceKind::Triangle { a, b, c } => vec![a, b, c],
            FaceKind::Quad { a, b, c, d } => vec![a, b, c, d],
        }
    }
}

/// Vertices and faces of a renderable object, in local space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Faces indexing into `vertices`.
    pub faces: Vec<Face>,
    /// Radius of the bounding sphere centered at the local origin.
    pub bounding_radius: f64,
}

impl Geometry {
    /// Build a geometry, checking indices and computing face normals,
    /// centroids and the bounding sphere.
    pub fn new(vertices: Vec<Point3>, faces: Vec<Face>) -> Result<Self> {
        let mut geometry = Self::from_raw_parts(vertices, faces, 0.0);
        geometry.validate()?;
        geometry.fill_derived();
        Ok(geometry)
    }

    /// Assemble a geometry whose normals, centroids and bounding radius are
    /// already known. Nothing is validated or recomputed.
    pub fn from_raw_parts(vertices: Vec<Point3>, faces: Vec<Face>, bounding_radius: f64) -> Self {
        Self {
            vertices,
            faces,
            bounding_radius,
        }
    }

    /// A `width` x `height` rectangle in the XY plane facing +Z, as one quad.
    pub fn plane(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let vertices = vec![
            Point3::new(-hw, -hh, 0.0),
            Point3::new(hw, -hh, 0.0),
            Point3::new(hw, hh, 0.0),
            Point3::new(-hw, hh, 0.0),
        ];
        Self::with_computed(vertices, vec![Face::quad(0, 1, 2, 3)])
    }

    /// An axis-aligned box centered at the origin with six outward-facing
    /// quads. Faces carry material indices 0..6 in the order
    /// +X, -X, +Y, -Y, +Z, -Z.
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
        let vertices = vec![
            Point3::new(-hx, -hy, -hz),
            Point3::new(hx, -hy, -hz),
            Point3::new(hx, hy, -hz),
            Point3::new(-hx, hy, -hz),
            Point3::new(-hx, -hy, hz),
            Point3::new(hx, -hy, hz),
            Point3::new(hx, hy, hz),
            Point3::new(-hx, hy, hz),
        ];
        let faces = [
            [1, 2, 6, 5],
            [0, 4, 7, 3],
            [3, 7, 6, 2],
            [0, 1, 5, 4],
            [4, 5, 6, 7],
            [0, 3, 2, 1],
        ]
        .iter()
        .enumerate()
        .map(|(i, q)| Face::quad(q[0], q[1], q[2], q[3]).with_material(i))
        .collect();
        Self::with_computed(vertices, faces)
    }

    // Only for builders whose indices are known to be in range.
    fn with_computed(vertices: Vec<Point3>, faces: Vec<Face>) -> Self {
        let mut geometry = Self::from_raw_parts(vertices, faces, 0.0);
        geometry.fill_derived();
        geometry
    }

    fn fill_derived(&mut self) {
        self.fill_face_normals();
        self.fill_centroids();
        self.compute_bounding_sphere();
    }

    /// Check that every face references an existing vertex.
    pub fn validate(&self) -> Result<()> {
        let len = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face.vertex_indices().iter().find(|&&i| i >= len) {
                return Err(SceneError::VertexIndexOutOfRange {
                    face: face_index,
                    index,
                    len,
                });
            }
        }
        Ok(())
    }

    /// Recompute every face normal from its first three vertices.
    ///
    /// Counter-clockwise winding, seen from the front, yields a normal
    /// pointing towards the viewer. Degenerate faces get a zero normal.
    /// Fails, leaving every face untouched, if any face indexes a missing
    /// vertex.
    pub fn compute_face_normals(&mut self) -> Result<()> {
        self.validate()?;
        self.fill_face_normals();
        Ok(())
    }

    /// Recompute every face centroid as the mean of its vertices.
    ///
    /// Fails, leaving every face untouched, if any face indexes a missing
    /// vertex.
    pub fn compute_centroids(&mut self) -> Result<()> {
        self.validate()?;
        self.fill_centroids();
        Ok(())
    }

    // Callers must have validated the indices.
    fn fill_face_normals(&mut self) {
        let vertices = &self.vertices;
        for face in &mut self.faces {
            let (a, b, c) = match face.kind {
                FaceKind::Triangle { a, b, c } | FaceKind::Quad { a, b, c, .. } => (a, b, c),
            };
            let cb = vertices[c] - vertices[b];
            let ab = vertices[a] - vertices[b];
            face.normal = cb
                .cross(&ab)
                .try_normalize(f64::EPSILON)
                .unwrap_or_else(Vec3::zeros);
        }
    }

    // Callers must have validated the indices.
    fn fill_centroids(&mut self) {
        let vertices = &self.vertices;
        for face in &mut self.faces {
            let indices = face.vertex_indices();
            let sum = indices
                .iter()
                .fold(Vec3::zeros(), |acc, &i| acc + vertices[i].coords);
            face.centroid = Point3::from(sum / indices.len() as f64);
        }
    }

    /// Recompute the bounding radius as the farthest vertex from the origin.
    pub fn compute_bounding_sphere(&mut self) {
        self.bounding_radius = self
            .vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, f64::max);
    }
}
