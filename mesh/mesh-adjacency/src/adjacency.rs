//! N-ring adjacency graph.
//!
//! Builds the traversal graph used for region growing: two vertices are
//! 1-ring neighbors when they share a face, and n-ring neighbors when they are
//! at most `n` edge hops apart. Masking and pair cuts are applied after the
//! ring expansion, so the masked graph never contains a masked-out vertex and
//! a cut pair is never adjacent, whatever the ring size. Severed vertices are
//! removed from the 1-ring before expansion, so no n-ring neighborhood reaches
//! through them.

use hashbrown::HashSet;
use tracing::{debug, info};

use crate::cut::CutEdges;
use crate::error::{AdjacencyError, AdjacencyResult};
use crate::params::AdjacencyParams;
use crate::topology::{SurfaceTopology, validate_faces};

/// Symmetric vertex adjacency with per-vertex sorted neighbor lists.
///
/// One entry exists per vertex, possibly empty. Neighbor lists never contain
/// the vertex itself.
///
/// # Example
///
/// ```
/// use mesh_adjacency::{AdjacencyGraph, AdjacencyParams};
///
/// // Two triangles sharing edge 1-2.
/// let faces = [[0, 1, 2], [1, 3, 2]];
/// let one = AdjacencyGraph::build(&faces, 4, &AdjacencyParams::default()).unwrap();
/// assert_eq!(one.neighbors(0), &[1, 2]);
///
/// let two = AdjacencyGraph::build(&faces, 4, &AdjacencyParams::with_n_ring(2)).unwrap();
/// assert_eq!(two.neighbors(0), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// Sorted neighbor ids for each vertex.
    neighbors: Vec<Vec<u32>>,

    /// Whether each vertex survived masking.
    active: Vec<bool>,

    /// Ring size the graph was built with.
    n_ring: usize,
}

impl AdjacencyGraph {
    /// Build an adjacency graph from a face list.
    ///
    /// # Arguments
    ///
    /// * `faces` - Triangles as vertex index triples
    /// * `vertex_count` - Number of vertices; ids are `0..vertex_count`
    /// * `params` - Ring size, optional mask and optional cut edges
    ///
    /// # Errors
    ///
    /// - [`AdjacencyError::InvalidRingSize`] if `params.n_ring` is zero
    /// - [`AdjacencyError::InvalidTopology`] if a face index is out of range
    /// - [`AdjacencyError::DimensionMismatch`] if the mask length differs from
    ///   `vertex_count`
    /// - [`AdjacencyError::InvalidCutVertex`] if a cut references a vertex out
    ///   of range
    pub fn build(
        faces: &[[u32; 3]],
        vertex_count: usize,
        params: &AdjacencyParams,
    ) -> AdjacencyResult<Self> {
        validate(faces, vertex_count, params)?;

        info!(
            vertices = vertex_count,
            faces = faces.len(),
            n_ring = params.n_ring,
            masked = params.mask.is_some(),
            cuts = params.cut_edges.as_ref().map_or(0, CutEdges::len),
            severed = params.cut_edges.as_ref().map_or(0, CutEdges::severed_count),
            "Building adjacency graph"
        );

        let mut one_ring = one_ring_neighbors(faces, vertex_count);
        if let Some(cuts) = &params.cut_edges {
            isolate_vertices(&mut one_ring, cuts);
        }
        let mut sets = if params.n_ring == 1 {
            one_ring
        } else {
            expand_rings(&one_ring, params.n_ring)
        };

        let active = match &params.mask {
            Some(mask) => {
                for (v, set) in sets.iter_mut().enumerate() {
                    if mask.as_slice()[v] {
                        set.retain(|&u| mask.contains(u));
                    } else {
                        set.clear();
                    }
                }
                debug!(
                    active = mask.active_count(),
                    total = vertex_count,
                    "Applied vertex mask"
                );
                mask.as_slice().to_vec()
            }
            None => vec![true; vertex_count],
        };

        let mut graph = Self {
            neighbors: into_sorted_lists(sets),
            active,
            n_ring: params.n_ring,
        };
        if let Some(cuts) = &params.cut_edges {
            let removed = graph.remove_edges(cuts);
            debug!(
                requested = cuts.len(),
                severed = cuts.severed_count(),
                removed,
                "Applied cut edges"
            );
        }
        Ok(graph)
    }

    /// Build an adjacency graph from a validated topology.
    ///
    /// # Errors
    ///
    /// See [`AdjacencyGraph::build`].
    pub fn from_topology(
        topology: &SurfaceTopology,
        params: &AdjacencyParams,
    ) -> AdjacencyResult<Self> {
        Self::build(topology.faces(), topology.vertex_count(), params)
    }

    /// Create a graph directly from neighbor lists, with every vertex active.
    ///
    /// Lists are sorted and deduplicated, self references are dropped, and
    /// missing reverse entries are added so the result is symmetric.
    ///
    /// # Errors
    ///
    /// Returns [`AdjacencyError::InvalidTopology`] if a neighbor id is out of
    /// range; `face` then holds the vertex whose list contained it.
    pub fn from_neighbor_lists(lists: Vec<Vec<u32>>) -> AdjacencyResult<Self> {
        let vertex_count = lists.len();
        let mut sets: Vec<HashSet<u32>> = vec![HashSet::new(); vertex_count];
        for (v, list) in lists.into_iter().enumerate() {
            for u in list {
                if u as usize >= vertex_count {
                    return Err(AdjacencyError::InvalidTopology {
                        face: v,
                        index: u,
                        vertex_count,
                    });
                }
                if u as usize != v {
                    sets[v].insert(u);
                    #[allow(clippy::cast_possible_truncation)]
                    sets[u as usize].insert(v as u32);
                }
            }
        }
        let neighbors = into_sorted_lists(sets);
        Ok(Self {
            neighbors,
            active: vec![true; vertex_count],
            n_ring: 1,
        })
    }

    /// Return this graph with the given cut edges severed.
    ///
    /// Severed vertices lose the edges this graph already has. On an n-ring
    /// graph, neighborhoods that reached through a severed vertex stay; build
    /// with [`AdjacencyParams::with_cut_edges`] to cut before ring expansion.
    ///
    /// # Errors
    ///
    /// Returns [`AdjacencyError::InvalidCutVertex`] if a cut references a
    /// vertex out of range.
    pub fn with_cut_edges(mut self, cuts: &CutEdges) -> AdjacencyResult<Self> {
        validate_cuts(cuts, self.vertex_count())?;
        let removed = self.remove_edges(cuts);
        debug!(
            requested = cuts.len(),
            severed = cuts.severed_count(),
            removed,
            "Applied cut edges"
        );
        Ok(self)
    }

    /// Remove every edge of the severed vertices, then each cut pair, from
    /// both endpoints. Returns how many edges were present.
    fn remove_edges(&mut self, cuts: &CutEdges) -> usize {
        let mut removed = 0;
        for v in cuts.severed() {
            let list = std::mem::take(&mut self.neighbors[v as usize]);
            for &u in &list {
                remove_sorted(&mut self.neighbors[u as usize], v);
            }
            removed += list.len();
        }
        for (a, b) in cuts.iter() {
            let hit_a = remove_sorted(&mut self.neighbors[a as usize], b);
            let hit_b = remove_sorted(&mut self.neighbors[b as usize], a);
            if hit_a || hit_b {
                removed += 1;
            }
        }
        removed
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check whether the graph has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Ring size used to build this graph.
    #[must_use]
    pub const fn n_ring(&self) -> usize {
        self.n_ring
    }

    /// Sorted neighbors of a vertex. Out-of-range vertices have none.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        self.neighbors
            .get(vertex as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Check whether a vertex exists and survived masking.
    #[inline]
    #[must_use]
    pub fn is_active(&self, vertex: u32) -> bool {
        self.active.get(vertex as usize).copied().unwrap_or(false)
    }

    /// Check whether two vertices are adjacent.
    #[must_use]
    pub fn contains_edge(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Number of neighbors of a vertex.
    #[must_use]
    pub fn degree(&self, vertex: u32) -> usize {
        self.neighbors(vertex).len()
    }

    /// Total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        // Each edge is stored twice (once for each direction)
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Check that `v ∈ adj[u] ⇔ u ∈ adj[v]` for every pair.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn is_symmetric(&self) -> bool {
        self.neighbors
            .iter()
            .enumerate()
            .all(|(u, list)| list.iter().all(|&v| self.contains_edge(v, u as u32)))
    }
}

fn validate(
    faces: &[[u32; 3]],
    vertex_count: usize,
    params: &AdjacencyParams,
) -> AdjacencyResult<()> {
    if params.n_ring == 0 {
        return Err(AdjacencyError::InvalidRingSize(0));
    }
    validate_faces(faces, vertex_count)?;
    if let Some(mask) = &params.mask {
        if mask.len() != vertex_count {
            return Err(AdjacencyError::DimensionMismatch {
                what: "mask",
                expected: vertex_count,
                actual: mask.len(),
            });
        }
    }
    if let Some(cuts) = &params.cut_edges {
        validate_cuts(cuts, vertex_count)?;
    }
    Ok(())
}

fn validate_cuts(cuts: &CutEdges, vertex_count: usize) -> AdjacencyResult<()> {
    // Pairs are normalized, so the second id is the larger one.
    let out_of_range = cuts
        .iter()
        .map(|(_, b)| b)
        .chain(cuts.severed())
        .find(|&v| v as usize >= vertex_count);
    match out_of_range {
        Some(index) => Err(AdjacencyError::InvalidCutVertex {
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Drop every edge touching a severed vertex.
fn isolate_vertices(sets: &mut [HashSet<u32>], cuts: &CutEdges) {
    for v in cuts.severed() {
        let set = std::mem::take(&mut sets[v as usize]);
        for u in set {
            sets[u as usize].remove(&v);
        }
    }
}

fn remove_sorted(list: &mut Vec<u32>, value: u32) -> bool {
    match list.binary_search(&value) {
        Ok(pos) => {
            list.remove(pos);
            true
        }
        Err(_) => false,
    }
}

fn into_sorted_lists(sets: Vec<HashSet<u32>>) -> Vec<Vec<u32>> {
    sets.into_iter()
        .map(|set| {
            let mut list: Vec<u32> = set.into_iter().collect();
            list.sort_unstable();
            list
        })
        .collect()
}

/// Neighbor sets from face incidence: vertices sharing a face are neighbors.
fn one_ring_neighbors(faces: &[[u32; 3]], vertex_count: usize) -> Vec<HashSet<u32>> {
    let mut sets: Vec<HashSet<u32>> = vec![HashSet::new(); vertex_count];
    for &[i0, i1, i2] in faces {
        for (a, b) in [(i0, i1), (i1, i2), (i2, i0)] {
            // Degenerate faces may repeat a vertex
            if a != b {
                sets[a as usize].insert(b);
                sets[b as usize].insert(a);
            }
        }
    }
    sets
}

/// Grow each vertex's 1-ring outwards until it covers `n_ring` hops.
#[allow(clippy::cast_possible_truncation)]
fn expand_rings(one_ring: &[HashSet<u32>], n_ring: usize) -> Vec<HashSet<u32>> {
    one_ring
        .iter()
        .enumerate()
        .map(|(v, first)| {
            let v = v as u32;
            let mut reached: HashSet<u32> = first.clone();
            let mut frontier: Vec<u32> = first.iter().copied().collect();
            for _ in 1..n_ring {
                let mut next = Vec::new();
                for &u in &frontier {
                    for &w in &one_ring[u as usize] {
                        if w != v && reached.insert(w) {
                            next.push(w);
                        }
                    }
                }
                if next.is_empty() {
                    break;
                }
                frontier = next;
            }
            reached
        })
        .collect()
}
