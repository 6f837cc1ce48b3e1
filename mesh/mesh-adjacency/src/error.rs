//! Error types for adjacency construction.

use thiserror::Error;

/// Result type for adjacency operations.
pub type AdjacencyResult<T> = Result<T, AdjacencyError>;

/// Errors that can occur while building an adjacency graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdjacencyError {
    /// A face references a vertex outside `0..vertex_count`.
    #[error("invalid topology: face {face} references vertex {index} (surface has {vertex_count} vertices)")]
    InvalidTopology {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Total number of vertices on the surface.
        vertex_count: usize,
    },

    /// A per-vertex input does not have one entry per vertex.
    #[error("dimension mismatch: {what} has {actual} entries, expected {expected}")]
    DimensionMismatch {
        /// Which input was mis-sized.
        what: &'static str,
        /// Expected number of entries.
        expected: usize,
        /// Actual number of entries.
        actual: usize,
    },

    /// A cut edge references a vertex outside `0..vertex_count`.
    #[error("invalid cut edge vertex {index} (surface has {vertex_count} vertices)")]
    InvalidCutVertex {
        /// The out-of-range vertex index.
        index: u32,
        /// Total number of vertices on the surface.
        vertex_count: usize,
    },

    /// The ring size must be at least one.
    #[error("invalid ring size {0} (must be >= 1)")]
    InvalidRingSize(usize),
}
