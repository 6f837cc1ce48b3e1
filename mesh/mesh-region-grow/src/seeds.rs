//! Seed groups and stop criteria.

use hashbrown::HashMap;
use mesh_adjacency::AdjacencyGraph;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GrowError, GrowResult};

/// Ordered seed groups; each group founds one independently grown region.
///
/// # Example
///
/// ```
/// use mesh_region_grow::SeedGroups;
///
/// let seeds = SeedGroups::new(vec![vec![0, 1], vec![9]]);
/// assert_eq!(seeds.len(), 2);
/// assert_eq!(seeds.group(1), Some(&[9][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedGroups {
    groups: Vec<Vec<u32>>,
}

impl SeedGroups {
    /// Create seed groups. Validation happens when growth starts.
    #[must_use]
    pub const fn new(groups: Vec<Vec<u32>>) -> Self {
        Self { groups }
    }

    /// A single group.
    #[must_use]
    pub fn single(group: impl IntoIterator<Item = u32>) -> Self {
        Self {
            groups: vec![group.into_iter().collect()],
        }
    }

    /// One single-vertex group per vertex.
    #[must_use]
    pub fn per_vertex(vertices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            groups: vertices.into_iter().map(|v| vec![v]).collect(),
        }
    }

    /// Append a group.
    pub fn push(&mut self, group: Vec<u32>) {
        self.groups.push(group);
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// One group by index.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&[u32]> {
        self.groups.get(index).map(Vec::as_slice)
    }

    /// All groups in order.
    #[must_use]
    pub fn groups(&self) -> &[Vec<u32>] {
        &self.groups
    }

    /// Check every group against the graph.
    ///
    /// Groups must be non-empty, seeds must be active vertices of the graph,
    /// distinct within their group and owned by a single group.
    pub(crate) fn validate(&self, adjacency: &AdjacencyGraph) -> GrowResult<()> {
        let vertex_count = adjacency.vertex_count();
        let mut owner: HashMap<u32, usize> = HashMap::new();
        for (index, group) in self.groups.iter().enumerate() {
            if group.is_empty() {
                return Err(GrowError::EmptySeedGroup { group: index });
            }
            for &vertex in group {
                if vertex as usize >= vertex_count {
                    return Err(GrowError::invalid_seed(vertex, "out of range"));
                }
                if !adjacency.is_active(vertex) {
                    return Err(GrowError::invalid_seed(vertex, "masked out"));
                }
                match owner.insert(vertex, index) {
                    Some(previous) if previous == index => {
                        return Err(GrowError::invalid_seed(
                            vertex,
                            "repeated within its seed group",
                        ));
                    }
                    Some(_) => {
                        return Err(GrowError::invalid_seed(
                            vertex,
                            "shared by more than one seed group",
                        ));
                    }
                    None => {}
                }
            }
        }
        Ok(())
    }
}

impl From<Vec<Vec<u32>>> for SeedGroups {
    fn from(groups: Vec<Vec<u32>>) -> Self {
        Self::new(groups)
    }
}

/// Target member count per region for simple and adaptive growth.
///
/// # Example
///
/// ```
/// use mesh_region_grow::StopCriteria;
///
/// assert_eq!(StopCriteria::from_counts(vec![500]), StopCriteria::Uniform(500));
/// assert_eq!(
///     StopCriteria::from_counts(vec![10, 20]),
///     StopCriteria::PerGroup(vec![10, 20])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopCriteria {
    /// Same target for every group.
    Uniform(usize),
    /// One target per group, in group order.
    PerGroup(Vec<usize>),
}

impl Default for StopCriteria {
    fn default() -> Self {
        Self::Uniform(500)
    }
}

impl StopCriteria {
    /// Interpret a list of counts; a single count applies to every group.
    #[must_use]
    pub fn from_counts(counts: Vec<usize>) -> Self {
        match counts.as_slice() {
            [single] => Self::Uniform(*single),
            _ => Self::PerGroup(counts),
        }
    }

    /// Expand to one target per group.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::StopCriteriaMismatch`] if a per-group list has
    /// neither one entry nor `groups` entries.
    pub fn resolve(&self, groups: usize) -> GrowResult<Vec<usize>> {
        match self {
            Self::Uniform(count) => Ok(vec![*count; groups]),
            Self::PerGroup(counts) if counts.len() == 1 => Ok(vec![counts[0]; groups]),
            Self::PerGroup(counts) if counts.len() == groups => Ok(counts.clone()),
            Self::PerGroup(counts) => Err(GrowError::StopCriteriaMismatch {
                criteria: counts.len(),
                groups,
            }),
        }
    }
}

impl From<usize> for StopCriteria {
    fn from(count: usize) -> Self {
        Self::Uniform(count)
    }
}
