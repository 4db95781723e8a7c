//! Error types for scene construction.

use thiserror::Error;

use crate::NodeId;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A node id does not belong to this scene.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// A face was described with an unsupported number of vertices.
    #[error("face {face} has {count} vertices, expected 3 or 4")]
    InvalidFaceArity {
        /// Index of the offending face.
        face: usize,
        /// Number of vertex indices supplied.
        count: usize,
    },

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

    /// Scene description could not be parsed.
    #[error("invalid scene description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
