//! Triangle surface topology.
//!
//! A [`SurfaceTopology`] is the connectivity half of an indexed triangle
//! mesh: a vertex count and a list of faces. Positions are not needed for
//! graph construction and are left to the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AdjacencyError, AdjacencyResult};

/// Immutable face list over `vertex_count` vertices.
///
/// # Example
///
/// ```
/// use mesh_adjacency::SurfaceTopology;
///
/// let surface = SurfaceTopology::new(3, vec![[0, 1, 2]]).unwrap();
/// assert_eq!(surface.vertex_count(), 3);
/// assert_eq!(surface.face_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceTopology {
    vertex_count: usize,
    faces: Vec<[u32; 3]>,
}

impl SurfaceTopology {
    /// Create a topology, checking that every face index is in range.
    ///
    /// # Errors
    ///
    /// Returns [`AdjacencyError::InvalidTopology`] for the first face that
    /// references a vertex outside `0..vertex_count`.
    pub fn new(vertex_count: usize, faces: Vec<[u32; 3]>) -> AdjacencyResult<Self> {
        validate_faces(&faces, vertex_count)?;
        Ok(Self {
            vertex_count,
            faces,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The face list.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Check whether the surface has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

/// Check that every index of every face is below `vertex_count`.
pub(crate) fn validate_faces(faces: &[[u32; 3]], vertex_count: usize) -> AdjacencyResult<()> {
    for (face, indices) in faces.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(AdjacencyError::InvalidTopology {
                face,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}
