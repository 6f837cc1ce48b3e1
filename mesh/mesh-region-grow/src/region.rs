//! Grown regions.
//!
//! A [`Region`] is the frozen result of growing one seed group. While growth
//! runs, the region lives as a crate-private [`GrowingRegion`] that owns its
//! member set, its frontier and the running scalar profile of its members.

use std::collections::BTreeSet;

use mesh_adjacency::AdjacencyGraph;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::scalar::{ProfileAccumulator, ScalarField, ScalarProfile};

/// A grown set of vertices, founded by one seed group.
///
/// # Example
///
/// ```
/// use mesh_region_grow::Region;
///
/// let region = Region::new(vec![2], [2, 3, 1]);
/// assert_eq!(region.len(), 3);
/// assert_eq!(region.to_vec(), vec![1, 2, 3]);
/// assert_eq!(region.label_overlay(5), vec![0, 1, 1, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    seeds: Vec<u32>,
    vertices: BTreeSet<u32>,
}

impl Region {
    /// Create a region from its seeds and members. Seeds are always members.
    #[must_use]
    pub fn new(seeds: Vec<u32>, vertices: impl IntoIterator<Item = u32>) -> Self {
        let mut vertices: BTreeSet<u32> = vertices.into_iter().collect();
        vertices.extend(seeds.iter().copied());
        Self { seeds, vertices }
    }

    /// The seed group this region grew from.
    #[must_use]
    pub fn seeds(&self) -> &[u32] {
        &self.seeds
    }

    /// Member vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
        self.vertices.iter().copied()
    }

    /// Member vertices as a sorted vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.vertices.iter().copied().collect()
    }

    /// Number of member vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check whether the region has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check whether a vertex is a member.
    #[must_use]
    pub fn contains(&self, vertex: u32) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Check whether two regions share any vertex.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.vertices().any(|v| large.contains(v))
    }

    /// Per-vertex label: 1 for members, 0 elsewhere.
    ///
    /// Members at or beyond `vertex_count` are ignored.
    #[must_use]
    pub fn label_overlay(&self, vertex_count: usize) -> Vec<u8> {
        let mut labels = vec![0u8; vertex_count];
        for v in self.vertices() {
            if let Some(slot) = labels.get_mut(v as usize) {
                *slot = 1;
            }
        }
        labels
    }
}

/// Lifecycle of a region during growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GrowthState {
    /// Only the seeds are members.
    Seeded,
    /// At least one vertex has been added.
    Growing,
    /// The stop criterion was reached or the frontier ran out.
    Stopped,
}

/// A region being grown over an adjacency graph.
#[derive(Debug)]
pub(crate) struct GrowingRegion<'a> {
    adjacency: &'a AdjacencyGraph,
    scalar: Option<&'a ScalarField>,
    seeds: Vec<u32>,
    members: BTreeSet<u32>,
    frontier: BTreeSet<u32>,
    profile: Option<ProfileAccumulator>,
    state: GrowthState,
}

impl<'a> GrowingRegion<'a> {
    /// Seed a region. Seeds must already be validated against the graph.
    pub(crate) fn new(
        adjacency: &'a AdjacencyGraph,
        scalar: Option<&'a ScalarField>,
        seeds: &[u32],
    ) -> Self {
        let mut region = Self {
            adjacency,
            scalar,
            seeds: seeds.to_vec(),
            members: BTreeSet::new(),
            frontier: BTreeSet::new(),
            profile: scalar.map(|s| ProfileAccumulator::new(s.frame_count())),
            state: GrowthState::Seeded,
        };
        for &seed in seeds {
            region.include(seed);
        }
        region
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn frontier(&self) -> &BTreeSet<u32> {
        &self.frontier
    }

    /// Add a frontier vertex and extend the frontier with its unvisited neighbors.
    pub(crate) fn add(&mut self, vertex: u32) {
        self.include(vertex);
        self.state = GrowthState::Growing;
    }

    pub(crate) fn stop(&mut self) {
        self.state = GrowthState::Stopped;
    }

    /// Add the best candidate unless the region has `stop` members or no
    /// frontier left, in which case it stops.
    ///
    /// Returns the added vertex, or `None` once stopped.
    pub(crate) fn advance(&mut self, stop: usize, assessment: Assessment) -> Option<u32> {
        if self.state == GrowthState::Stopped {
            return None;
        }
        let candidate = if self.len() < stop {
            self.best_candidate(assessment)
        } else {
            None
        };
        match candidate {
            Some(vertex) => self.add(vertex),
            None => self.stop(),
        }
        candidate
    }

    fn include(&mut self, vertex: u32) {
        if !self.members.insert(vertex) {
            return;
        }
        self.frontier.remove(&vertex);
        for &n in self.adjacency.neighbors(vertex) {
            if !self.members.contains(&n) {
                self.frontier.insert(n);
            }
        }
        if let (Some(acc), Some(scalar)) = (self.profile.as_mut(), self.scalar) {
            acc.push(&scalar.row(vertex));
        }
    }

    /// Current profile of the members, if a scalar field is attached.
    pub(crate) fn profile(&self) -> Option<ScalarProfile> {
        self.profile.as_ref().map(ProfileAccumulator::profile)
    }

    /// Profile of the outer boundary (the frontier), if a scalar field is attached.
    pub(crate) fn frontier_profile(&self) -> Option<ScalarProfile> {
        self.scalar
            .map(|s| s.profile_of(self.frontier.iter().copied()))
    }

    /// Frontier vertex with the highest score; ties go to the lowest id.
    ///
    /// Returns `None` when the frontier is empty or no scalar field is attached.
    pub(crate) fn best_candidate(&self, assessment: Assessment) -> Option<u32> {
        let scalar = self.scalar?;
        let region = self.profile()?;
        let mut best: Option<(u32, f64)> = None;
        // The frontier iterates in ascending id order, so a strict comparison
        // keeps the lowest id among equal scores.
        for &v in &self.frontier {
            let mut score = assessment.score(&region, &scalar.vertex_profile(v));
            if score.is_nan() {
                score = f64::NEG_INFINITY;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((v, score)),
            }
        }
        best.map(|(v, _)| v)
    }

    /// Contrast of the members against the outer boundary.
    pub(crate) fn assess(&self, assessment: Assessment) -> Option<f64> {
        let region = self.profile()?;
        let boundary = self.frontier_profile()?;
        assessment.contrast(&region, &boundary)
    }

    /// Frame-mean scalar value of the outer boundary.
    pub(crate) fn outer_boundary_value(&self) -> Option<f64> {
        self.frontier_profile()
            .filter(|p| !p.is_empty())
            .map(|p| p.frame_mean())
    }

    /// Freeze into an immutable region.
    pub(crate) fn freeze(self) -> Region {
        Region {
            seeds: self.seeds,
            vertices: self.members,
        }
    }
}
