//! Error types for ray casting.

use sightline_scene::NodeId;
use thiserror::Error;

/// Errors that can occur during a ray cast.
///
/// Missing an object is never an error; these only report malformed input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaycastError {
    /// A node id does not belong to the scene being cast against.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but geometry has {len} vertices")]
    VertexIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: usize,
        /// Number of vertices in the geometry.
        len: usize,
    },

    /// Invalid raycaster settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for ray casting operations.
pub type Result<T> = std::result::Result<T, RaycastError>;
