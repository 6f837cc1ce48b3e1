//! Result types for region growing.

use crate::history::GrowthHistory;
use crate::region::Region;
use crate::strategy::GrowthStrategy;

/// Region and history produced by adaptive growth for one seed group.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveGrowth {
    /// The region at the configured stop criterion.
    pub region: Region,

    /// Components, assessments and outer boundary values recorded on the way.
    pub history: GrowthHistory,
}

/// Result of [`RegionGrower::grow`](crate::RegionGrower::grow).
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthOutcome {
    /// Strategy that produced the regions.
    pub strategy: GrowthStrategy,

    /// One region per seed group, in seed group order.
    pub regions: Vec<Region>,

    /// One history per seed group for adaptive growth; empty otherwise.
    pub histories: Vec<GrowthHistory>,
}

impl GrowthOutcome {
    pub(crate) fn from_adaptive(grown: Vec<AdaptiveGrowth>) -> Self {
        let (regions, histories) = grown.into_iter().map(|g| (g.region, g.history)).unzip();
        Self {
            strategy: GrowthStrategy::Adaptive,
            regions,
            histories,
        }
    }

    /// Number of regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Total member count over all regions. Overlapping members count once
    /// per region.
    #[must_use]
    pub fn total_vertices(&self) -> usize {
        self.regions.iter().map(Region::len).sum()
    }

    /// Check whether any two regions share a vertex.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        self.regions
            .iter()
            .enumerate()
            .any(|(i, a)| self.regions[i + 1..].iter().any(|b| a.overlaps(b)))
    }

    /// History for one seed group, if the strategy kept one.
    #[must_use]
    pub fn history(&self, group: usize) -> Option<&GrowthHistory> {
        self.histories.get(group)
    }
}

impl std::fmt::Display for GrowthOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Growth ({}): {} regions, {} vertices",
            self.strategy,
            self.region_count(),
            self.total_vertices()
        )?;
        if !self.histories.is_empty() {
            let records: usize = self.histories.iter().map(GrowthHistory::len).sum();
            write!(f, ", {records} assessments recorded")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(regions: Vec<Region>) -> GrowthOutcome {
        GrowthOutcome {
            strategy: GrowthStrategy::Connectivity,
            regions,
            histories: Vec::new(),
        }
    }

    #[test]
    fn test_counts_and_overlap() {
        let result = outcome(vec![
            Region::new(vec![0], [0, 1, 2]),
            Region::new(vec![5], [4, 5]),
        ]);
        assert_eq!(result.region_count(), 2);
        assert_eq!(result.total_vertices(), 5);
        assert!(!result.has_overlap());
        assert!(result.history(0).is_none());

        let result = outcome(vec![
            Region::new(vec![0], [0, 1, 2]),
            Region::new(vec![5], [2, 5]),
        ]);
        assert!(result.has_overlap());
    }

    #[test]
    fn test_display() {
        let result = outcome(vec![Region::new(vec![0], [0, 1, 2])]);
        let display = format!("{result}");
        assert!(display.contains("crg"));
        assert!(display.contains("1 regions"));
        assert!(display.contains("3 vertices"));
    }
}
