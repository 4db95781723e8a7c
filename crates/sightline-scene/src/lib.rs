#![warn(missing_docs)]

//! Scene graph for sightline.
//!
//! Holds everything the raycaster reads but does not own:
//!
//! - [`Scene`] - slotmap arena of [`Node`]s with parent/child links and
//!   cached world transforms
//! - [`Geometry`] - indexed vertices and triangle/quad [`Face`]s with
//!   precomputed normals, centroids and a bounding radius
//! - [`Material`] / [`MaterialSlot`] - the face side a ray may hit
//! - [`SceneDescription`] - JSON scene files

mod description;
pub mod error;
mod geometry;
mod material;
mod node;
mod scene;

pub use description::{
    FaceDescription, GeometryDescription, MaterialDescription, NodeDescription, NodeKindDescription,
    SceneDescription,
};
pub use error::{Result, SceneError};
pub use geometry::{Face, FaceKind, Geometry};
pub use material::{Material, MaterialSlot, Side};
pub use node::{Mesh, Node, NodeKind};
pub use scene::{Descendants, Scene};

slotmap::new_key_type! {
    /// Handle to a node of a [`Scene`].
    pub struct NodeId;
}
