//! Parameters for adjacency construction.

use crate::cut::CutEdges;
use crate::mask::VertexMask;

/// Parameters for building an [`AdjacencyGraph`](crate::AdjacencyGraph).
///
/// # Example
///
/// ```
/// use mesh_adjacency::{AdjacencyParams, CutEdges};
///
/// let params = AdjacencyParams::with_n_ring(2)
///     .with_cut_edges(CutEdges::from_path(&[2, 3]));
/// assert_eq!(params.n_ring, 2);
/// assert!(params.mask.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyParams {
    /// Ring size: neighbors are all vertices within this many edge hops.
    /// Must be at least 1. Default: 1
    pub n_ring: usize,

    /// Optional vertex mask. Masked-out vertices lose all neighbors and are
    /// removed from every other neighbor set. Default: None
    pub mask: Option<VertexMask>,

    /// Optional cut edges, removed from both endpoints' neighbor sets.
    /// Default: None
    pub cut_edges: Option<CutEdges>,
}

impl Default for AdjacencyParams {
    fn default() -> Self {
        Self {
            n_ring: 1,
            mask: None,
            cut_edges: None,
        }
    }
}

impl AdjacencyParams {
    /// Create params for the given ring size.
    #[must_use]
    pub fn with_n_ring(n_ring: usize) -> Self {
        Self {
            n_ring,
            ..Default::default()
        }
    }

    /// Set the vertex mask.
    #[must_use]
    pub fn with_mask(mut self, mask: VertexMask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the cut edges.
    #[must_use]
    pub fn with_cut_edges(mut self, cut_edges: CutEdges) -> Self {
        self.cut_edges = Some(cut_edges);
        self
    }
}
