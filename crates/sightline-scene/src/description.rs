//! Declarative JSON scene format.
//!
//! A scene file is a tree of nodes. Each node carries an optional
//! transform, a `type` (`group`, `particle` or `mesh`) and its children:
//!
//! ```json
//! {
//!   "nodes": [
//!     {
//!       "name": "floor",
//!       "type": "mesh",
//!       "rotation": [-90.0, 0.0, 0.0],
//!       "geometry": { "type": "plane", "width": 10.0, "height": 10.0 },
//!       "material": { "side": "double" }
//!     }
//!   ]
//! }
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};
use sightline_math::{Point3, Rotation, Vec3};

use crate::{Face, Geometry, Material, MaterialSlot, Node, NodeId, Result, Scene, SceneError};

/// Root of a scene file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Root nodes.
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
}

/// One node and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Node name.
    #[serde(default)]
    pub name: String,
    /// Translation relative to the parent.
    #[serde(default)]
    pub position: [f64; 3],
    /// Euler angles in degrees, applied as X, then Y, then Z.
    #[serde(default)]
    pub rotation: [f64; 3],
    /// Per-axis scale. Ignored for particles, whose scale is their radius.
    #[serde(default = "unit_scale")]
    pub scale: [f64; 3],
    /// Node payload.
    #[serde(flatten)]
    pub kind: NodeKindDescription,
    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDescription>,
}

fn unit_scale() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

/// Node payload, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKindDescription {
    /// Plain transform node.
    Group,
    /// Point primitive.
    Particle {
        /// Hit radius.
        radius: f64,
    },
    /// Polygon mesh.
    Mesh {
        /// Mesh geometry.
        geometry: GeometryDescription,
        /// Mesh material(s).
        #[serde(default)]
        material: MaterialDescription,
    },
}

/// Geometry source, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryDescription {
    /// See [`Geometry::plane`].
    Plane {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        height: f64,
    },
    /// See [`Geometry::cuboid`].
    Cuboid {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        height: f64,
        /// Extent along Z.
        depth: f64,
    },
    /// Explicit vertices and faces.
    Indexed {
        /// Vertex positions.
        vertices: Vec<[f64; 3]>,
        /// Faces of 3 or 4 vertex indices.
        faces: Vec<FaceDescription>,
    },
}

/// A face of an indexed geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDescription {
    /// Three or four vertex indices, counter-clockwise seen from the front.
    pub indices: Vec<usize>,
    /// Multi-material table entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<usize>,
}

/// Either a material table or a single material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialDescription {
    /// Per-face materials.
    Multi {
        /// Entries selected by face material index.
        materials: Vec<Material>,
    },
    /// One material for every face.
    Single(Material),
}

impl Default for MaterialDescription {
    fn default() -> Self {
        MaterialDescription::Single(Material::default())
    }
}

impl From<MaterialDescription> for MaterialSlot {
    fn from(desc: MaterialDescription) -> Self {
        match desc {
            MaterialDescription::Multi { materials } => MaterialSlot::Multi(materials),
            MaterialDescription::Single(material) => MaterialSlot::Single(material),
        }
    }
}

impl GeometryDescription {
    /// Build the geometry, checking face arity and vertex indices.
    pub fn build(&self) -> Result<Geometry> {
        match self {
            GeometryDescription::Plane { width, height } => Ok(Geometry::plane(*width, *height)),
            GeometryDescription::Cuboid {
                width,
                height,
                depth,
            } => Ok(Geometry::cuboid(*width, *height, *depth)),
            GeometryDescription::Indexed { vertices, faces } => {
                let vertices = vertices
                    .iter()
                    .map(|&[x, y, z]| Point3::new(x, y, z))
                    .collect();
                let faces = faces
                    .iter()
                    .enumerate()
                    .map(|(i, f)| f.build(i))
                    .collect::<Result<Vec<_>>>()?;
                Geometry::new(vertices, faces)
            }
        }
    }
}

impl FaceDescription {
    fn build(&self, index: usize) -> Result<Face> {
        let face = match self.indices.as_slice() {
            &[a, b, c] => Face::triangle(a, b, c),
            &[a, b, c, d] => Face::quad(a, b, c, d),
            other => {
                return Err(SceneError::InvalidFaceArity {
                    face: index,
                    count: other.len(),
                })
            }
        };
        Ok(match self.material {
            Some(m) => face.with_material(m),
            None => face,
        })
    }
}

impl NodeDescription {
    fn to_node(&self) -> Result<Node> {
        let node = match &self.kind {
            NodeKindDescription::Group => Node::group(&self.name),
            NodeKindDescription::Particle { radius } => {
                return Ok(self.place(Node::particle(&self.name, *radius)));
            }
            NodeKindDescription::Mesh { geometry, material } => Node::mesh(
                &self.name,
                Arc::new(geometry.build()?),
                MaterialSlot::from(material.clone()),
            ),
        };
        let [sx, sy, sz] = self.scale;
        Ok(self.place(node).with_scale(Vec3::new(sx, sy, sz)))
    }

    fn place(&self, node: Node) -> Node {
        let [px, py, pz] = self.position;
        let [rx, ry, rz] = self.rotation.map(f64::to_radians);
        node.with_position(Vec3::new(px, py, pz))
            .with_rotation(Rotation::from_euler_angles(rx, ry, rz))
    }

    fn insert(&self, scene: &mut Scene, parent: Option<NodeId>) -> Result<()> {
        let node = self.to_node()?;
        let id = match parent {
            Some(parent) => scene.add_child(parent, node)?,
            None => scene.add(node),
        };
        for child in &self.children {
            child.insert(scene, Some(id))?;
        }
        Ok(())
    }
}

impl SceneDescription {
    /// Parse a scene description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a scene with up-to-date world transforms.
    pub fn build(&self) -> Result<Scene> {
        let mut scene = Scene::new();
        for node in &self.nodes {
            node.insert(&mut scene, None)?;
        }
        scene.update_world_transforms();
        debug!(
            "built scene with {} nodes ({} roots)",
            scene.len(),
            scene.roots().len()
        );
        Ok(scene)
    }
}

impl Scene {
    /// Parse and build a scene from its JSON description.
    pub fn from_json(json: &str) -> Result<Self> {
        SceneDescription::from_json(json)?.build()
    }
}
