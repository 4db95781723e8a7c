//! Scene graph nodes.

use std::sync::Arc;

use sightline_math::{Rotation, Transform, Vec3};

use crate::{Geometry, MaterialSlot, NodeId};

/// A renderable polygon mesh.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Shared local-space geometry.
    pub geometry: Arc<Geometry>,
    /// Material, or per-face material table.
    pub material: MaterialSlot,
}

/// What a node is, beyond its place in the hierarchy.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Plain transform node with no surface of its own.
    Group,
    /// Polygon mesh.
    Mesh(Mesh),
    /// Point primitive whose hit radius is `scale.x`.
    Particle,
}

/// A node of a [`crate::Scene`].
#[derive(Debug, Clone)]
pub struct Node {
    /// Human-readable name, not required to be unique.
    pub name: String,
    /// Node payload.
    pub kind: NodeKind,
    /// Translation relative to the parent.
    pub position: Vec3,
    /// Rotation relative to the parent.
    pub rotation: Rotation,
    /// Per-axis scale relative to the parent.
    pub scale: Vec3,
    /// Local-to-world transform, refreshed by
    /// [`crate::Scene::update_world_transforms`].
    pub world: Transform,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: Vec3::zeros(),
            rotation: Rotation::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            world: Transform::identity(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// A group node.
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Group)
    }

    /// A mesh node.
    pub fn mesh(name: impl Into<String>, geometry: Arc<Geometry>, material: impl Into<MaterialSlot>) -> Self {
        Self::new(
            name,
            NodeKind::Mesh(Mesh {
                geometry,
                material: material.into(),
            }),
        )
    }

    /// A particle of the given hit radius.
    pub fn particle(name: impl Into<String>, radius: f64) -> Self {
        Self::new(name, NodeKind::Particle).with_scale(Vec3::new(radius, radius, radius))
    }

    /// Set the position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Transform from this node's space to its parent's.
    pub fn local_transform(&self) -> Transform {
        Transform::from_parts(&self.position, &self.rotation, &self.scale)
    }

    /// Parent node, if this is not a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The mesh payload, if this node is a mesh.
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}
