//! Per-vertex inclusion masks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AdjacencyError, AdjacencyResult};

/// A boolean flag per vertex; `true` keeps the vertex in the traversal graph.
///
/// # Example
///
/// ```
/// use mesh_adjacency::VertexMask;
///
/// // Label files list member vertices; everything else is masked out.
/// let mask = VertexMask::from_label([1, 3], 5).unwrap();
/// assert!(mask.contains(1));
/// assert!(!mask.contains(2));
/// assert_eq!(mask.active_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexMask {
    flags: Vec<bool>,
}

impl VertexMask {
    /// Create a mask from explicit flags.
    #[must_use]
    pub const fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Create a mask where every vertex is kept.
    #[must_use]
    pub fn all(vertex_count: usize) -> Self {
        Self {
            flags: vec![true; vertex_count],
        }
    }

    /// Create a mask from a numeric overlay; non-zero values are kept.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            flags: values.iter().map(|&v| v != 0.0).collect(),
        }
    }

    /// Create a mask from a list of member vertices.
    ///
    /// # Errors
    ///
    /// Returns [`AdjacencyError::DimensionMismatch`] if a listed vertex is
    /// not below `vertex_count`.
    pub fn from_label(
        vertices: impl IntoIterator<Item = u32>,
        vertex_count: usize,
    ) -> AdjacencyResult<Self> {
        let mut flags = vec![false; vertex_count];
        for v in vertices {
            let slot = flags
                .get_mut(v as usize)
                .ok_or(AdjacencyError::DimensionMismatch {
                    what: "label vertex",
                    expected: vertex_count,
                    actual: v as usize + 1,
                })?;
            *slot = true;
        }
        Ok(Self { flags })
    }

    /// Number of vertices covered by the mask.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check whether the mask covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Check whether a vertex is kept. Out-of-range vertices are not.
    #[inline]
    #[must_use]
    pub fn contains(&self, vertex: u32) -> bool {
        self.flags.get(vertex as usize).copied().unwrap_or(false)
    }

    /// Number of kept vertices.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// The raw flags.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_values_keeps_nonzero() {
        let mask = VertexMask::from_values(&[0.0, 1.5, -2.0, 0.0]);
        assert_eq!(mask.as_slice(), &[false, true, true, false]);
        assert_eq!(mask.active_count(), 2);
    }

    #[test]
    fn from_label_rejects_out_of_range() {
        let err = VertexMask::from_label([0, 7], 5).unwrap_err();
        assert!(matches!(
            err,
            AdjacencyError::DimensionMismatch { expected: 5, .. }
        ));
    }

    #[test]
    fn contains_out_of_range_is_false() {
        let mask = VertexMask::all(3);
        assert!(mask.contains(2));
        assert!(!mask.contains(3));
    }
}
