//! Cut edges that sever the traversal graph.
//!
//! A cut removes an undirected vertex pair from the adjacency graph without
//! touching the surface itself. Cuts are usually drawn by the user as a path
//! of vertices across the surface:
//!
//! - [`CutEdges::from_path`] cuts only the consecutive pairs of the path
//! - [`CutEdges::sever_path`] also severs every path vertex, removing all of
//!   its edges, so a boundary-to-boundary line splits a triangulated surface
//!   into two sides

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Undirected vertex pairs and severed vertices to remove from the
/// adjacency graph.
///
/// Pairs are stored normalized (`(min, max)`), so `(u, v)` and `(v, u)` are
/// the same cut. Self-pairs are ignored. A severed vertex loses every edge,
/// at any ring size.
///
/// # Example
///
/// ```
/// use mesh_adjacency::CutEdges;
///
/// let cuts = CutEdges::from_path(&[4, 2, 3]);
/// assert!(cuts.contains(2, 4));
/// assert!(cuts.contains(3, 2));
/// assert!(!cuts.contains(4, 3));
///
/// let severed = CutEdges::sever_path(&[4, 2, 3]);
/// assert!(severed.contains(4, 3));
/// assert!(severed.contains(2, 7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutEdges {
    edges: BTreeSet<(u32, u32)>,

    #[cfg_attr(feature = "serde", serde(default))]
    vertices: BTreeSet<u32>,
}

impl CutEdges {
    /// Create an empty cut set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cut set from explicit pairs.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut cuts = Self::new();
        for (a, b) in pairs {
            cuts.insert(a, b);
        }
        cuts
    }

    /// Create a cut set from an ordered vertex path, one cut per consecutive pair.
    #[must_use]
    pub fn from_path(path: &[u32]) -> Self {
        Self::from_pairs(path.windows(2).map(|w| (w[0], w[1])))
    }

    /// Create a cut set that severs every vertex of a drawn path.
    ///
    /// The consecutive pairs are kept as well. A path running from boundary
    /// to boundary disconnects the two sides of the surface; the path
    /// vertices themselves end up isolated.
    #[must_use]
    pub fn sever_path(path: &[u32]) -> Self {
        let mut cuts = Self::from_path(path);
        for &v in path {
            cuts.sever(v);
        }
        cuts
    }

    /// Add a cut between two vertices.
    ///
    /// Returns `false` if the pair was already cut or is a self-pair.
    pub fn insert(&mut self, a: u32, b: u32) -> bool {
        if a == b {
            return false;
        }
        self.edges.insert(normalize_edge(a, b))
    }

    /// Sever a vertex from all of its neighbors.
    ///
    /// Returns `false` if the vertex was already severed.
    pub fn sever(&mut self, vertex: u32) -> bool {
        self.vertices.insert(vertex)
    }

    /// Check whether the pair is cut, in either direction, either as a pair
    /// or through a severed endpoint.
    #[must_use]
    pub fn contains(&self, a: u32, b: u32) -> bool {
        a != b
            && (self.edges.contains(&normalize_edge(a, b))
                || self.is_severed(a)
                || self.is_severed(b))
    }

    /// Check whether a vertex is severed.
    #[must_use]
    pub fn is_severed(&self, vertex: u32) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Number of cut pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Number of severed vertices.
    #[must_use]
    pub fn severed_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check whether there are no cut pairs and no severed vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.vertices.is_empty()
    }

    /// Iterate over normalized pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().copied()
    }

    /// Iterate over severed vertices in ascending order.
    pub fn severed(&self) -> impl Iterator<Item = u32> + '_ {
        self.vertices.iter().copied()
    }
}

impl FromIterator<(u32, u32)> for CutEdges {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[inline]
const fn normalize_edge(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}
